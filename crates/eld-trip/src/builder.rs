//! Fluent builder for [`TripPlanner`].

use eld_hos::{ComplianceChecker, DaySegmenter, SegmenterConfig};
use eld_route::Geocoder;

use crate::planner::TripPlanner;
use crate::{TripError, TripResult};

/// Default prefix joined in front of every artifact path in a response.
pub const DEFAULT_MEDIA_URL: &str = "/media";

/// Fluent builder for [`TripPlanner<G>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                        |
/// |------------------------|--------------------------------|
/// | `.segmenter_config(c)` | `SegmenterConfig::default()`   |
/// | `.compliance(c)`       | 70-hour `ComplianceChecker`    |
/// | `.media_url(s)`        | `"/media"`                     |
///
/// # Example
///
/// ```rust,ignore
/// let planner = TripPlannerBuilder::new(gazetteer)
///     .segmenter_config(SegmenterConfig { trailing_off_duty: TrailingOffDuty::EndOfDay })
///     .media_url("https://cdn.example.com/media")
///     .build()?;
/// ```
pub struct TripPlannerBuilder<G: Geocoder> {
    geocoder:  G,
    segmenter: Option<SegmenterConfig>,
    checker:   Option<ComplianceChecker>,
    media_url: Option<String>,
}

impl<G: Geocoder> TripPlannerBuilder<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder, segmenter: None, checker: None, media_url: None }
    }

    pub fn segmenter_config(mut self, config: SegmenterConfig) -> Self {
        self.segmenter = Some(config);
        self
    }

    /// Override the cycle limit the verdict is computed against.
    pub fn compliance(mut self, checker: ComplianceChecker) -> Self {
        self.checker = Some(checker);
        self
    }

    pub fn media_url(mut self, url: impl Into<String>) -> Self {
        self.media_url = Some(url.into());
        self
    }

    /// Validate inputs and return a ready planner.
    pub fn build(self) -> TripResult<TripPlanner<G>> {
        let checker = self.checker.unwrap_or_default();
        if !checker.cycle_limit_hours.is_finite() || checker.cycle_limit_hours <= 0.0 {
            return Err(TripError::Config(format!(
                "cycle limit must be a positive number of hours, got {}",
                checker.cycle_limit_hours
            )));
        }

        Ok(TripPlanner {
            geocoder:  self.geocoder,
            segmenter: DaySegmenter::new(self.segmenter.unwrap_or_default()),
            checker,
            media_url: self.media_url.unwrap_or_else(|| DEFAULT_MEDIA_URL.to_string()),
        })
    }
}
