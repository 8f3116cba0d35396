//! Artifact naming.
//!
//! Every rendered day is addressable by trip and day number:
//!
//! ```text
//! {category}/{artifact}_{trip_id}_day_{day}.{ext}
//! eld_logs/eld_log_17_day_2.svg
//! ```
//!
//! Consumers (download links, the web front end) depend on this pattern, so
//! it is fixed here rather than left to each renderer.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use eld_core::TripId;

use crate::OutputError;

// ── ArtifactFormat ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArtifactFormat {
    Csv,
    #[default]
    Svg,
    None,
}

impl ArtifactFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactFormat::Csv => "csv",
            ArtifactFormat::Svg | ArtifactFormat::None => "svg",
        }
    }
}

impl FromStr for ArtifactFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ArtifactFormat::Csv),
            "svg" => Ok(ArtifactFormat::Svg),
            "none" => Ok(ArtifactFormat::None),
            other => Err(OutputError::UnknownFormat(other.to_string())),
        }
    }
}

// ── ArtifactNaming ────────────────────────────────────────────────────────────

/// The `{category}` directory and `{artifact}` stem of every path.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtifactNaming {
    pub category: String,
    pub artifact: String,
}

impl Default for ArtifactNaming {
    fn default() -> Self {
        Self {
            category: "eld_logs".to_string(),
            artifact: "eld_log".to_string(),
        }
    }
}

impl ArtifactNaming {
    pub fn path(&self, trip_id: TripId, day: u32, ext: &str) -> ArtifactPath {
        ArtifactPath {
            category: self.category.clone(),
            artifact: self.artifact.clone(),
            trip_id,
            day,
            ext: ext.to_string(),
        }
    }
}

// ── ArtifactPath ──────────────────────────────────────────────────────────────

/// Location of one rendered day, relative to the media root.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtifactPath {
    pub category: String,
    pub artifact: String,
    pub trip_id:  TripId,
    pub day:      u32,
    pub ext:      String,
}

impl ArtifactPath {
    /// `{artifact}_{trip_id}_day_{day}.{ext}`
    pub fn file_name(&self) -> String {
        format!("{}_{}_day_{}.{}", self.artifact, self.trip_id, self.day, self.ext)
    }

    /// `{category}/{file_name}` as a filesystem path.
    pub fn relative(&self) -> PathBuf {
        PathBuf::from(&self.category).join(self.file_name())
    }

    /// `{prefix}/{category}/{file_name}`, always `/`-separated.
    pub fn url(&self, prefix: &str) -> String {
        format!("{}/{}", prefix.trim_end_matches('/'), self)
    }
}

/// `{category}/{file_name}` with `/` separators regardless of platform.
impl fmt::Display for ArtifactPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.file_name())
    }
}
