//! Constants of the simplified Hours-of-Service rule set.
//!
//! # Model
//!
//! All durations are `f64` hours and all distances statute miles.  The rule
//! set is deliberately single-path:
//!
//! ```text
//! driving_time  = total_distance / AVERAGE_SPEED_MPH + FIRST_DAY_OVERHEAD_HOURS
//! fuel_stops    = max(0, ceil(total_distance / FUEL_INTERVAL_MILES) - 1)
//! total_time    = driving_time + fuel_stops * FUEL_STOP_HOURS
//! remaining     = CYCLE_LIMIT_HOURS - cycle_used
//! ```
//!
//! Sleeper-berth splits, 34-hour restarts, and adverse-driving exceptions are
//! not modelled.

/// Rolling on-duty limit (70 hours / 8 days).
pub const CYCLE_LIMIT_HOURS: f64 = 70.0;

/// Maximum driving hours attributed to a single day.
pub const MAX_DRIVE_HOURS_PER_DAY: f64 = 11.0;

/// Fixed non-driving overhead (pickup + dropoff) charged to day 1 only.
pub const FIRST_DAY_OVERHEAD_HOURS: f64 = 2.0;

/// Duty slot consumed on day 1 before the first driving stretch.
pub const PICKUP_SLOT_HOURS: f64 = 1.0;

/// Time spent loading at pickup, and again unloading at dropoff.
pub const LOAD_HANDLING_HOURS: f64 = 1.0;

/// Length of one log day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Average road speed used to turn miles into driving hours.
pub const AVERAGE_SPEED_MPH: f64 = 50.0;

/// One fuel stop per this many miles beyond the first block.
pub const FUEL_INTERVAL_MILES: f64 = 1_000.0;

/// Duration of one fuel stop.
pub const FUEL_STOP_HOURS: f64 = 0.5;
