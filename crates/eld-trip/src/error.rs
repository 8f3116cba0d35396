//! Trip-planning error type and its client-facing payload.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use eld_hos::HosError;
use eld_output::OutputError;
use eld_route::RouteError;

use crate::request::ValidationErrors;

/// Errors produced by `eld-trip`.
#[derive(Debug, Error)]
pub enum TripError {
    #[error("invalid trip request: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Hos(#[from] HosError),

    #[error("log rendering failed: {0}")]
    Output(#[from] OutputError),

    #[error("planner configuration error: {0}")]
    Config(String),
}

pub type TripResult<T> = Result<T, TripError>;

impl TripError {
    /// `true` when the request itself is at fault (bad fields, a location
    /// that cannot be geocoded, or numbers the segmenter rejects).
    pub fn is_client_error(&self) -> bool {
        match self {
            TripError::Validation(_) => true,
            TripError::Route(RouteError::Geocode { .. }) => true,
            TripError::Hos(HosError::InvalidInput { .. }) => true,
            _ => false,
        }
    }

    /// Body to send back to a client.
    ///
    /// Validation failures keep their per-field map; everything else is a
    /// single `{"error": message}` object.
    pub fn body(&self) -> ErrorBody {
        match self {
            TripError::Validation(errors) => ErrorBody::Fields(errors.clone()),
            other => ErrorBody::Message { error: other.to_string() },
        }
    }
}

/// Serialisable error payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Message { error: String },
    Fields(ValidationErrors),
}

impl ErrorBody {
    /// Field messages as an owned map, empty for the single-message form.
    pub fn field_messages(&self) -> BTreeMap<String, Vec<String>> {
        match self {
            ErrorBody::Fields(errors) => errors
                .fields()
                .map(|f| (f.to_string(), errors.messages(f).to_vec()))
                .collect(),
            ErrorBody::Message { .. } => BTreeMap::new(),
        }
    }
}
