//! `eld-core` — foundational types for the `eld` trip planner.
//!
//! This crate is a dependency of every other `eld-*` crate.  It has no
//! `eld-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`ids`]     | `TripId`                                                |
//! | [`geo`]     | `GeoPoint`, haversine distance in miles                 |
//! | [`hours`]   | Constants of the simplified Hours-of-Service rule set   |
//! | [`error`]   | `EldError`, `EldResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod hours;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EldError, EldResult};
pub use geo::GeoPoint;
pub use ids::TripId;
