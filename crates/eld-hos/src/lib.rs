//! `eld-hos` — Hours-of-Service day segmentation and cycle compliance.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`duty`]       | `DutyStatus`, `DutySegment`, `DayPlan`                     |
//! | [`segmenter`]  | `DaySegmenter`, `SegmenterConfig`, `TrailingOffDuty`       |
//! | [`compliance`] | `Compliance`, `ComplianceChecker`, `ComplianceReport`      |
//! | [`plan`]       | `TripPlan` (segmented days + verdict)                      |
//! | [`error`]      | `HosError`, `HosResult<T>`                                 |
//!
//! # Day model (summary)
//!
//! A trip of `total_time` hours is cut into log days.  Day 1 carries the
//! fixed 2-hour pickup/dropoff overhead; every later day is pure driving:
//!
//! ```text
//! day 1:   drive = max(0, min(11, remaining - 2))   daily = drive + 2
//! day ≥2:  drive = min(11, remaining)               daily = drive
//! distance = drive / total_time * total_distance
//! remaining -= daily   until remaining ≤ 0
//! ```
//!
//! Everything here is a pure function of its numeric inputs: no I/O, no
//! shared state.  Rendering a [`DayPlan`] is the caller's business.

pub mod compliance;
pub mod duty;
pub mod error;
pub mod plan;
pub mod segmenter;


pub use compliance::{check, Compliance, ComplianceChecker, ComplianceReport};
pub use duty::{DayPlan, DutySegment, DutyStatus};
pub use error::{HosError, HosResult};
pub use plan::TripPlan;
pub use segmenter::{segment, DaySegmenter, MAX_TRIP_HOURS, SegmenterConfig, TrailingOffDuty};
