//! 70-hour cycle compliance.
//!
//! ```text
//! remaining_hours = cycle_limit - cycle_used
//! Exceeded  iff  total_time > remaining_hours
//! ```
//!
//! `remaining_hours` is not clamped: with `cycle_used` above the limit it is
//! negative and any positive trip is `Exceeded`.

use std::fmt;

use eld_core::hours::CYCLE_LIMIT_HOURS;

/// Verdict of the cycle-hours check.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Compliance {
    Compliant,
    Exceeded,
}

impl Compliance {
    /// Human-readable verdict carried in the trip response.
    pub fn message(self) -> &'static str {
        match self {
            Compliance::Compliant => "Trip is within HOS limits",
            Compliance::Exceeded => "Warning: Trip exceeds 70-hr cycle limit",
        }
    }

    #[inline]
    pub fn is_compliant(self) -> bool {
        self == Compliance::Compliant
    }
}

impl fmt::Display for Compliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Verdict plus the figures it was derived from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplianceReport {
    pub verdict:         Compliance,
    /// `cycle_limit - cycle_used`; may be negative.
    pub remaining_hours: f64,
    /// Hours by which the trip overruns `remaining_hours`, if it does.
    pub excess_hours:    Option<f64>,
}

/// Compares a trip's duration with the hours left in the driver's cycle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplianceChecker {
    pub cycle_limit_hours: f64,
}

impl Default for ComplianceChecker {
    fn default() -> Self {
        Self { cycle_limit_hours: CYCLE_LIMIT_HOURS }
    }
}

impl ComplianceChecker {
    pub fn new(cycle_limit_hours: f64) -> Self {
        Self { cycle_limit_hours }
    }

    #[inline]
    pub fn remaining_hours(&self, cycle_used: f64) -> f64 {
        self.cycle_limit_hours - cycle_used
    }

    pub fn check(&self, total_time: f64, cycle_used: f64) -> Compliance {
        if total_time > self.remaining_hours(cycle_used) {
            Compliance::Exceeded
        } else {
            Compliance::Compliant
        }
    }

    pub fn report(&self, total_time: f64, cycle_used: f64) -> ComplianceReport {
        let remaining_hours = self.remaining_hours(cycle_used);
        let verdict = self.check(total_time, cycle_used);
        let excess_hours = match verdict {
            Compliance::Exceeded => Some(total_time - remaining_hours),
            Compliance::Compliant => None,
        };
        ComplianceReport { verdict, remaining_hours, excess_hours }
    }
}

/// [`ComplianceChecker::check`] against the 70-hour limit.
pub fn check(total_time: f64, cycle_used: f64) -> Compliance {
    ComplianceChecker::default().check(total_time, cycle_used)
}
