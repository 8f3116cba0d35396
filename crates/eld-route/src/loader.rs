//! CSV gazetteer loader.
//!
//! # CSV format
//!
//! One row per place.  Names may contain commas when quoted.
//!
//! ```csv
//! name,lat,lon
//! "Chicago, IL",41.8781,-87.6298
//! "Dallas, TX",32.7767,-96.7970
//! ```
//!
//! Coordinates are decimal degrees; rows outside ±90° / ±180° are rejected.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use eld_core::GeoPoint;

use crate::geocoder::Gazetteer;
use crate::RouteError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PlaceRecord {
    name: String,
    lat:  f64,
    lon:  f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Gazetteer`] from a CSV file.
pub fn load_gazetteer_csv(path: &Path) -> Result<Gazetteer, RouteError> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_gazetteer_reader(file)
}

/// Like [`load_gazetteer_csv`] but accepts any `Read` source.
///
/// Useful for embedded tables (pass the bytes of an `include_str!`) and for
/// tests (pass a `std::io::Cursor`).
pub fn load_gazetteer_reader<R: Read>(reader: R) -> Result<Gazetteer, RouteError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut gazetteer = Gazetteer::new();

    for (line, result) in csv_reader.deserialize::<PlaceRecord>().enumerate() {
        let row = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        if row.name.is_empty() {
            return Err(RouteError::Parse(format!("row {}: empty place name", line + 1)));
        }
        let point = GeoPoint::checked(row.lat, row.lon)
            .map_err(|e| RouteError::Parse(format!("row {} ({}): {e}", line + 1, row.name)))?;
        gazetteer.insert(&row.name, point);
    }

    Ok(gazetteer)
}
