//! `RouteSummary` and the three-stop route computation.
//!
//! ```text
//! total_distance = d(current → pickup) + d(pickup → dropoff)      great-circle miles
//! driving_time   = total_distance / 50 + 2                       50 mph + load/unload
//! fuel_stops     = max(0, ceil(total_distance / 1000) - 1)
//! total_time     = driving_time + 0.5 * fuel_stops
//! ```

use std::fmt;

use eld_core::hours::{
    AVERAGE_SPEED_MPH, FIRST_DAY_OVERHEAD_HOURS, FUEL_INTERVAL_MILES, FUEL_STOP_HOURS,
    LOAD_HANDLING_HOURS,
};
use eld_core::GeoPoint;
use tracing::{debug, info};

use crate::{Geocoder, RouteError, RouteResult};

// ── LocationRole ──────────────────────────────────────────────────────────────

/// Which of the three trip stops a location string was given for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LocationRole {
    Current,
    Pickup,
    Dropoff,
}

impl fmt::Display for LocationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LocationRole::Current => "current",
            LocationRole::Pickup => "pickup",
            LocationRole::Dropoff => "dropoff",
        })
    }
}

// ── RouteSummary ──────────────────────────────────────────────────────────────

/// Distance and time figures for a current → pickup → dropoff trip.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    /// Current, pickup, and dropoff coordinates, in that order.
    pub coordinates:         [GeoPoint; 3],
    pub distance_to_pickup:  f64,
    pub distance_to_dropoff: f64,
    /// Miles.
    pub total_distance:      f64,
    /// Hours on the road plus the fixed load/unload overhead.
    pub driving_time:        f64,
    pub fuel_stops:          u32,
    /// Hours; what the day segmenter consumes.
    pub total_time:          f64,
    /// Turn-by-turn style trip narrative.
    pub instructions:        Vec<String>,
}

impl RouteSummary {
    /// Compute the summary from already-resolved coordinates.
    ///
    /// `names` are the location strings as the caller gave them; they only
    /// appear in the instruction text.
    pub fn compute(names: [&str; 3], coordinates: [GeoPoint; 3]) -> Self {
        let [current, pickup, dropoff] = names;
        let [cur, pick, drop] = coordinates;

        let distance_to_pickup = cur.distance_miles(pick);
        let distance_to_dropoff = pick.distance_miles(drop);
        let total_distance = distance_to_pickup + distance_to_dropoff;

        let driving_time = total_distance / AVERAGE_SPEED_MPH + FIRST_DAY_OVERHEAD_HOURS;
        let fuel_stops = fuel_stops_for(total_distance);
        let total_time = driving_time + f64::from(fuel_stops) * FUEL_STOP_HOURS;

        let mut instructions = vec![
            format!("Start at {current}"),
            format!(
                "Drive {:.1} miles to {pickup} ({:.1} hrs)",
                distance_to_pickup,
                distance_to_pickup / AVERAGE_SPEED_MPH
            ),
            format!("Pick up load ({LOAD_HANDLING_HOURS} hr)"),
            format!(
                "Drive {:.1} miles to {dropoff} ({:.1} hrs)",
                distance_to_dropoff,
                distance_to_dropoff / AVERAGE_SPEED_MPH
            ),
            format!("Drop off load ({LOAD_HANDLING_HOURS} hr)"),
        ];
        instructions.extend((0..fuel_stops).map(|_| format!("Fuel stop ({FUEL_STOP_HOURS} hr)")));

        Self {
            coordinates,
            distance_to_pickup,
            distance_to_dropoff,
            total_distance,
            driving_time,
            fuel_stops,
            total_time,
            instructions,
        }
    }

    /// `[[lat, lon]; 3]`, the outbound coordinate list.
    pub fn coordinate_pairs(&self) -> [[f64; 2]; 3] {
        self.coordinates.map(GeoPoint::to_pair)
    }
}

/// One fuel stop per 1 000 miles beyond the first block.
pub fn fuel_stops_for(total_distance: f64) -> u32 {
    ((total_distance / FUEL_INTERVAL_MILES).ceil() - 1.0).max(0.0) as u32
}

// ── plan_route ────────────────────────────────────────────────────────────────

/// Resolve the three locations through `geocoder` and compute the summary.
///
/// Locations are resolved in order current → pickup → dropoff and the first
/// one that cannot be found fails the whole call with
/// [`RouteError::Geocode`].  Backend failures are surfaced as returned by
/// the geocoder.
pub fn plan_route<G: Geocoder + ?Sized>(
    geocoder: &G,
    current:  &str,
    pickup:   &str,
    dropoff:  &str,
) -> RouteResult<RouteSummary> {
    let cur = resolve(geocoder, LocationRole::Current, current)?;
    let pick = resolve(geocoder, LocationRole::Pickup, pickup)?;
    let drop = resolve(geocoder, LocationRole::Dropoff, dropoff)?;

    let summary = RouteSummary::compute([current, pickup, dropoff], [cur, pick, drop]);
    info!(
        total_distance = summary.total_distance,
        total_time = summary.total_time,
        fuel_stops = summary.fuel_stops,
        "route planned"
    );
    Ok(summary)
}

fn resolve<G: Geocoder + ?Sized>(
    geocoder: &G,
    role:     LocationRole,
    location: &str,
) -> RouteResult<GeoPoint> {
    match geocoder.geocode(location)? {
        Some(point) => {
            debug!(%role, location, %point, "location resolved");
            Ok(point)
        }
        None => Err(RouteError::Geocode { role, location: location.to_string() }),
    }
}
