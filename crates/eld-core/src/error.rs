//! Error type for the shared value types.
//!
//! Sub-crates keep their own error enums and map `EldError` into them at the
//! call site (the gazetteer loader turns a bad coordinate into a parse error
//! for the offending row).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EldError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `eld-core`.
pub type EldResult<T> = Result<T, EldError>;
