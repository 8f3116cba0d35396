//! `eld-output` — per-day driver log artifacts.
//!
//! Renderers turn one immutable [`DayPlan`][eld_hos::DayPlan] into one file.
//! They hold no shared canvas: every call gets its own output handle, so a
//! failure on day N never touches the files of other days or the plan data.
//!
//! | Format | Renderer         | File per day                                  |
//! |--------|------------------|-----------------------------------------------|
//! | `csv`  | `CsvLogRenderer` | `eld_logs/eld_log_{trip}_day_{n}.csv`         |
//! | `svg`  | `SvgLogRenderer` | `eld_logs/eld_log_{trip}_day_{n}.svg`         |
//! | `none` | `NullRenderer`   | *(nothing written; paths still computed)*     |
//!
//! # Usage
//!
//! ```rust,ignore
//! use eld_output::{ArtifactFormat, ArtifactNaming, renderer_for};
//!
//! let mut renderer = renderer_for(ArtifactFormat::Svg, Path::new("./media"), ArtifactNaming::default())?;
//! for day in &plan.days {
//!     let path = renderer.render_day(trip_id, day)?;
//!     println!("{}", path.url("/media"));
//! }
//! renderer.finish()?;
//! ```

pub mod artifact;
pub mod csv;
pub mod error;
pub mod renderer;
pub mod svg;

#[cfg(test)]
mod tests;

pub use artifact::{ArtifactFormat, ArtifactNaming, ArtifactPath};
pub use csv::CsvLogRenderer;
pub use error::{OutputError, OutputResult};
pub use renderer::{renderer_for, LogRenderer, NullRenderer};
pub use svg::SvgLogRenderer;
