//! Inbound trip request and its field validation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Longest accepted location string.
pub const MAX_LOCATION_LEN: usize = 200;

/// The four fields a client submits to plan a trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub current_location:  String,
    pub pickup_location:   String,
    pub dropoff_location:  String,
    /// Hours already used in the current 70-hour cycle.
    pub cycle_used:        f64,
}

impl TripRequest {
    pub fn new(
        current_location: impl Into<String>,
        pickup_location:  impl Into<String>,
        dropoff_location: impl Into<String>,
        cycle_used:       f64,
    ) -> Self {
        Self {
            current_location: current_location.into(),
            pickup_location:  pickup_location.into(),
            dropoff_location: dropoff_location.into(),
            cycle_used,
        }
    }

    /// Check every field and collect all problems at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for (field, value) in [
            ("current_location", &self.current_location),
            ("pickup_location", &self.pickup_location),
            ("dropoff_location", &self.dropoff_location),
        ] {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                errors.add(field, "This field is required.");
            } else {
                let len = trimmed.chars().count();
                if len > MAX_LOCATION_LEN {
                    errors.add(
                        field,
                        format!(
                            "Ensure this value has at most {MAX_LOCATION_LEN} characters (it has {len})."
                        ),
                    );
                }
            }
        }

        if !self.cycle_used.is_finite() {
            errors.add("cycle_used", "Enter a number.");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

// ── ValidationErrors ──────────────────────────────────────────────────────────

/// Per-field validation messages, serialised as `{ field: [message, …] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages recorded for `field` (empty if none).
    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names of the offending fields, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
