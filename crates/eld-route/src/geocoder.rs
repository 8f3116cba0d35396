//! Geocoding trait and the default in-memory gazetteer.
//!
//! # Pluggability
//!
//! `plan_route` resolves locations through the [`Geocoder`] trait, so a
//! network-backed implementation (Nominatim, a commercial API) can be slotted
//! in without touching the planner.  The default [`Gazetteer`] is a
//! case-insensitive name table plus literal `"lat, lon"` parsing, which is
//! enough for offline planning and tests.

use rustc_hash::FxHashMap;

use eld_core::GeoPoint;

use crate::RouteResult;

// ── Geocoder trait ────────────────────────────────────────────────────────────

/// Resolves a free-text location to a coordinate.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one geocoder can serve trips
/// planned in parallel.
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` means the location is unknown; `Err` means the lookup
    /// itself failed (backend down, quota exhausted, …).
    fn geocode(&self, query: &str) -> RouteResult<Option<GeoPoint>>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn geocode(&self, query: &str) -> RouteResult<Option<GeoPoint>> {
        (**self).geocode(query)
    }
}

impl<G: Geocoder + ?Sized> Geocoder for Box<G> {
    fn geocode(&self, query: &str) -> RouteResult<Option<GeoPoint>> {
        (**self).geocode(query)
    }
}

// ── Gazetteer ─────────────────────────────────────────────────────────────────

/// Place-name table keyed by normalised name.
///
/// Names are matched case-insensitively with surrounding whitespace trimmed
/// and inner runs of whitespace collapsed, so `"  chicago,  IL"` finds
/// `"Chicago, IL"`.
#[derive(Clone, Debug, Default)]
pub struct Gazetteer {
    places: FxHashMap<String, GeoPoint>,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a place.
    pub fn insert(&mut self, name: &str, point: GeoPoint) {
        self.places.insert(normalize(name), point);
    }

    /// Builder-style [`insert`][Self::insert].
    pub fn with_place(mut self, name: &str, point: GeoPoint) -> Self {
        self.insert(name, point);
        self
    }

    pub fn get(&self, name: &str) -> Option<GeoPoint> {
        self.places.get(&normalize(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Merge `other` into `self`; entries in `other` win on name clashes.
    pub fn extend(&mut self, other: Gazetteer) {
        self.places.extend(other.places);
    }
}

impl Geocoder for Gazetteer {
    fn geocode(&self, query: &str) -> RouteResult<Option<GeoPoint>> {
        if let Ok(point) = query.parse::<GeoPoint>() {
            return Ok(Some(point));
        }
        Ok(self.get(query))
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
