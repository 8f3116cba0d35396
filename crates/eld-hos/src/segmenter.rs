//! The day-splitting algorithm.
//!
//! # Loop
//!
//! ```text
//! remaining = total_time, day = 1
//! while remaining > 0:
//!     day 1:   drive = max(0, min(11, remaining - 2));  daily = drive + 2
//!     day ≥2:  drive = min(11, remaining);              daily = drive
//!     distance = (drive / total_time) * total_distance        (0 if total_time == 0)
//!     emit DayPlan { day, segments, drive, daily, distance }
//!     remaining -= daily; day += 1
//! ```
//!
//! Distance is apportioned by each day's share of the *whole* trip time,
//! so the per-day distances sum to `total_distance` only when the day-1
//! overhead is ignored.  That attribution is kept as-is.
//!
//! The `max(0, ..)` clamp on day 1 keeps trips of two hours or less from
//! producing a negative drive time.  Every iteration then reduces `remaining`
//! by at least `min(2, remaining)` hours, so the loop always terminates.
//! `total_time` is capped at [`MAX_TRIP_HOURS`]: far beyond that, subtracting
//! a day's hours from `remaining` no longer changes it in `f64`, and well
//! before that the day list alone exhausts memory.
//!
//! # Timelines
//!
//! ```text
//! day 1:   OffDuty [0, c]   Driving [c, c+1]   OnDuty [c+1, c+1+drive]
//!          OffDuty [c+daily, end]                 (c = cycle_used)
//! day ≥2:  OffDuty [0, 0]   Driving [0, drive]   OffDuty [drive, end]
//! ```
//!
//! The trailing Off-Duty segment has no natural end; [`TrailingOffDuty`]
//! decides where it stops.

use eld_core::hours::{
    FIRST_DAY_OVERHEAD_HOURS, HOURS_PER_DAY, MAX_DRIVE_HOURS_PER_DAY, PICKUP_SLOT_HOURS,
};
use tracing::debug;

use crate::duty::{DayPlan, DutySegment, DutyStatus};
use crate::error::{require_in_range, require_non_negative, HosResult};

/// Largest `total_time` accepted by [`DaySegmenter::segment`] (about 9,100
/// log days).
pub const MAX_TRIP_HOURS: f64 = 100_000.0;

// ── TrailingOffDuty ───────────────────────────────────────────────────────────

/// Where the open-ended trailing Off-Duty segment of each day ends.
///
/// Either way the end is clamped up to the segment start, so on day 1 with
/// [`DailyTime`][Self::DailyTime] the segment usually collapses to a
/// zero-length boundary marker at `cycle_used + daily_time`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TrailingOffDuty {
    /// End at the day's `total_time` (hours charged to the day).
    #[default]
    DailyTime,
    /// End at hour 24.
    EndOfDay,
}

impl TrailingOffDuty {
    #[inline]
    fn end_hour(self, start_hour: f64, daily_time: f64) -> f64 {
        let end = match self {
            TrailingOffDuty::DailyTime => daily_time,
            TrailingOffDuty::EndOfDay => HOURS_PER_DAY,
        };
        end.max(start_hour)
    }
}

impl std::str::FromStr for TrailingOffDuty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "daily_time" | "daily-time" => Ok(TrailingOffDuty::DailyTime),
            "end_of_day" | "end-of-day" => Ok(TrailingOffDuty::EndOfDay),
            other => Err(format!(
                "invalid trailing off-duty policy {other:?}: expected \"daily_time\" or \"end_of_day\""
            )),
        }
    }
}

// ── SegmenterConfig ───────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmenterConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub trailing_off_duty: TrailingOffDuty,
}

// ── DaySegmenter ──────────────────────────────────────────────────────────────

/// Splits a trip's total duration into per-day duty logs.
#[derive(Copy, Clone, Debug, Default)]
pub struct DaySegmenter {
    config: SegmenterConfig,
}

impl DaySegmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Partition a trip into log days.
    ///
    /// `total_time == 0` yields an empty plan.  Negative or non-finite
    /// `total_time`/`total_distance`, and a negative or non-finite
    /// `cycle_used` (it is the first segment's end hour), are rejected, as is
    /// a `total_time` above [`MAX_TRIP_HOURS`].
    pub fn segment(
        &self,
        total_time:     f64,
        cycle_used:     f64,
        total_distance: f64,
    ) -> HosResult<Vec<DayPlan>> {
        let total_time = require_in_range("total_time", total_time, MAX_TRIP_HOURS)?;
        let cycle_used = require_non_negative("cycle_used", cycle_used)?;
        let total_distance = require_non_negative("total_distance", total_distance)?;

        let mut days = Vec::new();
        let mut remaining_time = total_time;
        let mut day: u32 = 1;

        while remaining_time > 0.0 {
            let first_day = day == 1;

            let (drive_time, daily_time) = if first_day {
                let drive = MAX_DRIVE_HOURS_PER_DAY
                    .min(remaining_time - FIRST_DAY_OVERHEAD_HOURS)
                    .max(0.0);
                (drive, drive + FIRST_DAY_OVERHEAD_HOURS)
            } else {
                let drive = MAX_DRIVE_HOURS_PER_DAY.min(remaining_time);
                (drive, drive)
            };

            let distance = if total_time > 0.0 {
                (drive_time / total_time) * total_distance
            } else {
                0.0
            };

            let segments = if first_day {
                self.first_day_segments(cycle_used, drive_time, daily_time)
            } else {
                self.later_day_segments(drive_time, daily_time)
            };

            debug!(day, drive_time, daily_time, distance, remaining_time, "log day segmented");

            days.push(DayPlan {
                day_index: day,
                segments,
                drive_time,
                total_time: daily_time,
                distance,
            });

            remaining_time -= daily_time;
            day += 1;
        }

        Ok(days)
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn first_day_segments(&self, cycle_used: f64, drive_time: f64, daily_time: f64) -> Vec<DutySegment> {
        let pickup_end = cycle_used + PICKUP_SLOT_HOURS;
        let mut segments = vec![
            DutySegment::new(DutyStatus::OffDuty, 0.0, cycle_used),
            DutySegment::new(DutyStatus::Driving, cycle_used, pickup_end),
            DutySegment::new(DutyStatus::OnDuty, pickup_end, pickup_end + drive_time),
        ];
        if daily_time > drive_time {
            let start = cycle_used + daily_time;
            let end = self.config.trailing_off_duty.end_hour(start, daily_time);
            segments.push(DutySegment::new(DutyStatus::OffDuty, start, end));
        }
        segments
    }

    fn later_day_segments(&self, drive_time: f64, daily_time: f64) -> Vec<DutySegment> {
        let end = self.config.trailing_off_duty.end_hour(drive_time, daily_time);
        vec![
            DutySegment::new(DutyStatus::OffDuty, 0.0, 0.0),
            DutySegment::new(DutyStatus::Driving, 0.0, drive_time),
            DutySegment::new(DutyStatus::OffDuty, drive_time, end),
        ]
    }
}

/// [`DaySegmenter::segment`] with the default configuration.
pub fn segment(total_time: f64, cycle_used: f64, total_distance: f64) -> HosResult<Vec<DayPlan>> {
    DaySegmenter::default().segment(total_time, cycle_used, total_distance)
}
