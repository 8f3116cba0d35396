//! Outbound trip response.

use serde::Serialize;

use crate::planner::PlannedTrip;

/// One rendered log day as reported to the client.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DayLogDescriptor {
    pub day:        u32,
    /// Public URL (or path) of the rendered artifact.
    pub artifact:   String,
    pub distance:   f64,
    pub drive_time: f64,
    pub total_time: f64,
}

/// Everything a client needs to display a planned trip.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TripResponse {
    pub route_instructions: Vec<String>,
    pub total_distance:     f64,
    pub total_time:         f64,
    /// Human-readable compliance verdict.
    pub compliance:         String,
    pub eld_logs:           Vec<DayLogDescriptor>,
    /// `[lat, lon]` of current, pickup, and dropoff.
    pub coordinates:        [[f64; 2]; 3],
}

impl TripResponse {
    pub(crate) fn new(planned: &PlannedTrip, eld_logs: Vec<DayLogDescriptor>) -> Self {
        Self {
            route_instructions: planned.route.instructions.clone(),
            total_distance:     planned.route.total_distance,
            total_time:         planned.route.total_time,
            compliance:         planned.plan.compliance.message().to_string(),
            eld_logs,
            coordinates:        planned.route.coordinate_pairs(),
        }
    }
}
