//! Geographic coordinate type and great-circle distance.
//!
//! Trip legs span hundreds of miles, so `GeoPoint` stores `f64` degrees and
//! reports distances in statute miles, the unit every downstream figure
//! (fuel stops, drive hours, per-day distance) is expressed in.

use std::str::FromStr;

use crate::{EldError, EldResult};

/// Mean Earth radius in statute miles (6 371.0088 km / 1.609344).
pub const EARTH_RADIUS_MILES: f64 = 3_958.761_3;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct a point, rejecting out-of-range or non-finite degrees.
    pub fn checked(lat: f64, lon: f64) -> EldResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(EldError::InvalidInput(format!("latitude {lat} out of range")));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(EldError::InvalidInput(format!("longitude {lon} out of range")));
        }
        Ok(Self { lat, lon })
    }

    /// Haversine great-circle distance in statute miles.
    ///
    /// Spherical model: within ±0.5 % of the ellipsoidal geodesic, which is
    /// well inside the 50 mph average-speed approximation it feeds.
    pub fn distance_miles(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_MILES * c
    }

    /// `[lat, lon]` pair, the shape used by the outbound coordinate list.
    #[inline]
    pub fn to_pair(self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Parses `"lat, lon"` (comma separated, whitespace tolerant).
impl FromStr for GeoPoint {
    type Err = EldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| EldError::Parse(format!("expected \"lat, lon\", got {s:?}")))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| EldError::Parse(format!("invalid latitude {:?}", lat.trim())))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| EldError::Parse(format!("invalid longitude {:?}", lon.trim())))?;
        GeoPoint::checked(lat, lon)
    }
}
