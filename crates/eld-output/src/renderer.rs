//! The `LogRenderer` trait implemented by all artifact backends.

use std::path::Path;

use eld_core::TripId;
use eld_hos::DayPlan;

use crate::{
    ArtifactFormat, ArtifactNaming, ArtifactPath, CsvLogRenderer, OutputResult, SvgLogRenderer,
};

/// Trait implemented by the CSV, SVG, and null renderers.
pub trait LogRenderer {
    /// Render one day and return where it was written.
    fn render_day(&mut self, trip_id: TripId, day: &DayPlan) -> OutputResult<ArtifactPath>;

    /// Flush anything buffered.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

impl<R: LogRenderer + ?Sized> LogRenderer for &mut R {
    fn render_day(&mut self, trip_id: TripId, day: &DayPlan) -> OutputResult<ArtifactPath> {
        (**self).render_day(trip_id, day)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

impl<R: LogRenderer + ?Sized> LogRenderer for Box<R> {
    fn render_day(&mut self, trip_id: TripId, day: &DayPlan) -> OutputResult<ArtifactPath> {
        (**self).render_day(trip_id, day)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// A [`LogRenderer`] that writes nothing and only computes paths.  Use for
/// dry runs or when the caller only needs the numbers.
#[derive(Clone, Debug)]
pub struct NullRenderer {
    naming: ArtifactNaming,
    ext:    &'static str,
}

impl NullRenderer {
    pub fn new(naming: ArtifactNaming, format: ArtifactFormat) -> Self {
        Self { naming, ext: format.extension() }
    }
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self::new(ArtifactNaming::default(), ArtifactFormat::default())
    }
}

impl LogRenderer for NullRenderer {
    fn render_day(&mut self, trip_id: TripId, day: &DayPlan) -> OutputResult<ArtifactPath> {
        Ok(self.naming.path(trip_id, day.day_index, self.ext))
    }
}

/// Construct the renderer for `format`, rooted at `root`.
pub fn renderer_for(
    format: ArtifactFormat,
    root:   &Path,
    naming: ArtifactNaming,
) -> OutputResult<Box<dyn LogRenderer>> {
    Ok(match format {
        ArtifactFormat::Csv => Box::new(CsvLogRenderer::new(root, naming)?),
        ArtifactFormat::Svg => Box::new(SvgLogRenderer::new(root, naming)?),
        ArtifactFormat::None => Box::new(NullRenderer::new(naming, format)),
    })
}
