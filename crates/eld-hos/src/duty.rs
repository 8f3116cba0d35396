//! Duty-status timeline types: `DutyStatus`, `DutySegment`, and `DayPlan`.
//!
//! # Timeline model
//!
//! Every hour offset is relative to the start of its own log day.  A day's
//! `segments` are ordered but need not be contiguous: the segmenter leaves
//! gaps where the paper log would show the pen lifted, and consumers must
//! not coalesce or pad them.

use std::fmt;

// ── DutyStatus ────────────────────────────────────────────────────────────────

/// Line of the driver's log a segment is drawn on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DutyStatus {
    OffDuty,
    Driving,
    OnDuty,
}

impl DutyStatus {
    /// Label printed on the paper log grid.
    pub fn label(self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDuty => "On Duty",
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── DutySegment ───────────────────────────────────────────────────────────────

/// One stretch of a single duty status within a log day.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DutySegment {
    pub status:     DutyStatus,
    /// Hours since the start of the day.
    pub start_hour: f64,
    /// Hours since the start of the day; never before `start_hour`.
    pub end_hour:   f64,
}

impl DutySegment {
    /// # Panics
    ///
    /// Panics in debug mode if `end_hour < start_hour`.
    pub fn new(status: DutyStatus, start_hour: f64, end_hour: f64) -> Self {
        debug_assert!(end_hour >= start_hour, "segment ends before it starts");
        Self { status, start_hour, end_hour }
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.end_hour - self.start_hour
    }

    /// `true` for a zero-length boundary marker.
    #[inline]
    pub fn is_marker(&self) -> bool {
        self.end_hour == self.start_hour
    }
}

// ── DayPlan ───────────────────────────────────────────────────────────────────

/// The computed log for one calendar day of a trip.
///
/// Created once by the segmenter and never mutated afterwards; renderers
/// receive it by shared reference.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayPlan {
    /// 1-based day number.
    pub day_index:  u32,
    pub segments:   Vec<DutySegment>,
    /// Driving hours attributed to this day.
    pub drive_time: f64,
    /// Driving plus non-driving hours charged to this day.
    pub total_time: f64,
    /// Miles attributed to this day (share of the trip total).
    pub distance:   f64,
}

impl DayPlan {
    /// Non-driving hours charged to this day.
    #[inline]
    pub fn overhead_time(&self) -> f64 {
        self.total_time - self.drive_time
    }

    /// Segments with the given status, in timeline order.
    pub fn segments_with(&self, status: DutyStatus) -> impl Iterator<Item = &DutySegment> {
        self.segments.iter().filter(move |s| s.status == status)
    }
}
