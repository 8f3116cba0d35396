//! `TripPlan` — the segmented days of one trip and its compliance verdict.

use tracing::warn;

use crate::compliance::{Compliance, ComplianceChecker};
use crate::duty::DayPlan;
use crate::segmenter::DaySegmenter;
use crate::HosResult;

/// Ordered log days (`day_index` 1, 2, …) plus the cycle verdict.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripPlan {
    pub days:       Vec<DayPlan>,
    pub compliance: Compliance,
}

impl TripPlan {
    /// Segment the trip, then check it against the remaining cycle hours.
    ///
    /// Both steps finish before anything is returned, so callers that render
    /// afterwards always work from a complete plan.
    pub fn build(
        segmenter:      &DaySegmenter,
        checker:        &ComplianceChecker,
        total_time:     f64,
        cycle_used:     f64,
        total_distance: f64,
    ) -> HosResult<Self> {
        let days = segmenter.segment(total_time, cycle_used, total_distance)?;
        let compliance = checker.check(total_time, cycle_used);
        if compliance == Compliance::Exceeded {
            warn!(
                total_time,
                remaining_hours = checker.remaining_hours(cycle_used),
                "trip exceeds cycle limit"
            );
        }
        Ok(Self { days, compliance })
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn total_drive_time(&self) -> f64 {
        self.days.iter().map(|d| d.drive_time).sum()
    }

    /// Sum of the hours charged to each day.  Equals the trip's total time
    /// unless the day-1 clamp fired.
    pub fn total_time(&self) -> f64 {
        self.days.iter().map(|d| d.total_time).sum()
    }

    pub fn total_distance(&self) -> f64 {
        self.days.iter().map(|d| d.distance).sum()
    }

    pub fn day(&self, day_index: u32) -> Option<&DayPlan> {
        let idx = (day_index as usize).checked_sub(1)?;
        self.days.get(idx)
    }
}
