//! Route-subsystem error type.

use thiserror::Error;

use crate::summary::LocationRole;

/// Errors produced by `eld-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Could not geocode {role} location: {location}")]
    Geocode { role: LocationRole, location: String },

    #[error("geocoding error: {0}")]
    Lookup(String),

    #[error("gazetteer parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
