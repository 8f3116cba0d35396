//! `eld-route` — location resolution and the route summary.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`geocoder`] | `Geocoder` trait, `Gazetteer`                             |
//! | [`loader`]   | `load_gazetteer_csv`, `load_gazetteer_reader`             |
//! | [`summary`]  | `RouteSummary`, `LocationRole`, `plan_route`              |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod geocoder;
pub mod loader;
pub mod summary;


pub use error::{RouteError, RouteResult};
pub use geocoder::{Gazetteer, Geocoder};
pub use loader::{load_gazetteer_csv, load_gazetteer_reader};
pub use summary::{plan_route, LocationRole, RouteSummary};
