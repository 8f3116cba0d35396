//! Built-in place table of major US freight hubs.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use eld_route::{load_gazetteer_csv, load_gazetteer_reader, Gazetteer};

const BUILTIN_HUBS: &str = include_str!("../data/hubs.csv");

pub fn builtin() -> Result<Gazetteer> {
    load_gazetteer_reader(BUILTIN_HUBS.as_bytes()).context("built-in hub table is malformed")
}

/// The built-in hubs, with `extra` layered on top when given.
pub fn load(extra: Option<&Path>) -> Result<Gazetteer> {
    let mut gazetteer = builtin()?;
    if let Some(path) = extra {
        let places = load_gazetteer_csv(path)
            .with_context(|| format!("failed to load gazetteer {}", path.display()))?;
        info!(path = %path.display(), places = places.len(), "gazetteer loaded");
        gazetteer.extend(places);
    }
    Ok(gazetteer)
}
