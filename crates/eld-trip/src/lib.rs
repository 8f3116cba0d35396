//! `eld-trip` — plans a truck trip end to end.
//!
//! # Pipeline
//!
//! ```text
//! TripRequest ─validate─▶ plan_route ─▶ DaySegmenter ─▶ ComplianceChecker   (pure)
//!                                                        │
//!                                          PlannedTrip ◀─┘
//!                                                │
//!                        LogRenderer per DayPlan ─▶ TripResponse           (I/O)
//! ```
//!
//! [`TripPlanner::plan`] is side-effect-free and finishes every computation
//! before returning.  [`TripPlanner::render`] only ever sees a complete
//! [`PlannedTrip`], so a renderer failure cannot leave the route, days, or
//! verdict half-built.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `plan_batch` runs on Rayon's thread pool.              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use eld_output::{ArtifactNaming, SvgLogRenderer};
//! use eld_route::Gazetteer;
//! use eld_trip::{TripPlannerBuilder, TripRequest};
//!
//! let planner = TripPlannerBuilder::new(gazetteer).media_url("/media").build()?;
//! let mut renderer = SvgLogRenderer::new(Path::new("./media"), ArtifactNaming::default())?;
//! let response = planner.plan_and_render(&request, TripId(1), &mut renderer)?;
//! ```

pub mod builder;
pub mod error;
pub mod planner;
pub mod request;
pub mod response;


pub use builder::TripPlannerBuilder;
pub use error::{ErrorBody, TripError, TripResult};
pub use planner::{PlannedTrip, TripPlanner};
pub use request::{TripRequest, ValidationErrors};
pub use response::{DayLogDescriptor, TripResponse};
