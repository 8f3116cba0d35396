//! `TripPlanner` — validate, route, segment, check, then render.

use tracing::{debug, info};

use eld_core::TripId;
use eld_hos::{ComplianceChecker, ComplianceReport, DaySegmenter, TripPlan};
use eld_output::LogRenderer;
use eld_route::{plan_route, Geocoder, RouteSummary};

use crate::request::TripRequest;
use crate::response::{DayLogDescriptor, TripResponse};
use crate::TripResult;

// ── PlannedTrip ───────────────────────────────────────────────────────────────

/// A fully computed trip: route figures, log days, and cycle verdict.
///
/// Nothing has been written anywhere yet.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedTrip {
    pub request: TripRequest,
    pub route:   RouteSummary,
    pub plan:    TripPlan,
    pub report:  ComplianceReport,
}

// ── TripPlanner ───────────────────────────────────────────────────────────────

/// Plans trips against a fixed geocoder and HOS configuration.
///
/// Build one with [`TripPlannerBuilder`](crate::TripPlannerBuilder).  The
/// planner holds no per-trip state, so a single instance can serve any
/// number of requests, concurrently if `G` allows.
pub struct TripPlanner<G: Geocoder> {
    pub(crate) geocoder:  G,
    pub(crate) segmenter: DaySegmenter,
    pub(crate) checker:   ComplianceChecker,
    pub(crate) media_url: String,
}

impl<G: Geocoder> TripPlanner<G> {
    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    pub fn segmenter(&self) -> &DaySegmenter {
        &self.segmenter
    }

    pub fn checker(&self) -> &ComplianceChecker {
        &self.checker
    }

    pub fn media_url(&self) -> &str {
        &self.media_url
    }

    /// Validate `request` and compute everything short of rendering.
    ///
    /// Location strings are trimmed before geocoding.
    pub fn plan(&self, request: &TripRequest) -> TripResult<PlannedTrip> {
        request.validate()?;

        let route = plan_route(
            &self.geocoder,
            request.current_location.trim(),
            request.pickup_location.trim(),
            request.dropoff_location.trim(),
        )?;

        let plan = TripPlan::build(
            &self.segmenter,
            &self.checker,
            route.total_time,
            request.cycle_used,
            route.total_distance,
        )?;
        let report = self.checker.report(route.total_time, request.cycle_used);

        info!(
            days = plan.len(),
            total_distance = route.total_distance,
            total_time = route.total_time,
            compliance = ?plan.compliance,
            "trip planned"
        );
        Ok(PlannedTrip { request: request.clone(), route, plan, report })
    }

    /// Render every day of `planned` and assemble the response.
    ///
    /// Days are rendered in order and the first renderer error aborts the
    /// call.  Artifacts already written for earlier days are left in place.
    pub fn render<R: LogRenderer + ?Sized>(
        &self,
        planned:  &PlannedTrip,
        trip_id:  TripId,
        renderer: &mut R,
    ) -> TripResult<TripResponse> {
        let mut eld_logs = Vec::with_capacity(planned.plan.len());
        for day in &planned.plan.days {
            let artifact = renderer.render_day(trip_id, day)?;
            debug!(%trip_id, day = day.day_index, artifact = %artifact, "log day rendered");
            eld_logs.push(DayLogDescriptor {
                day:        day.day_index,
                artifact:   artifact.url(&self.media_url),
                distance:   day.distance,
                drive_time: day.drive_time,
                total_time: day.total_time,
            });
        }
        renderer.finish()?;

        Ok(TripResponse::new(planned, eld_logs))
    }

    /// [`plan`](Self::plan) followed by [`render`](Self::render).
    pub fn plan_and_render<R: LogRenderer + ?Sized>(
        &self,
        request:  &TripRequest,
        trip_id:  TripId,
        renderer: &mut R,
    ) -> TripResult<TripResponse> {
        let planned = self.plan(request)?;
        self.render(&planned, trip_id, renderer)
    }

    /// Plan independent requests; results keep the input order.
    ///
    /// With the `parallel` Cargo feature the requests are planned on Rayon's
    /// thread pool.
    pub fn plan_batch(&self, requests: &[TripRequest]) -> Vec<TripResult<PlannedTrip>> {
        #[cfg(not(feature = "parallel"))]
        let results: Vec<_> = requests.iter().map(|r| self.plan(r)).collect();

        #[cfg(feature = "parallel")]
        let results: Vec<_> = {
            use rayon::prelude::*;
            requests.par_iter().map(|r| self.plan(r)).collect()
        };

        debug!(
            requests = requests.len(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "batch planned"
        );
        results
    }
}
