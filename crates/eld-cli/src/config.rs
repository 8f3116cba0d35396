//! TOML configuration for `eld-plan`.
//!
//! ```toml
//! output_dir        = "media"
//! media_url         = "/media"
//! gazetteer         = "places.csv"    # layered over the built-in hubs
//! format            = "svg"           # csv | svg | none
//! trailing_off_duty = "daily_time"    # daily_time | end_of_day
//! cycle_limit_hours = 70.0
//! ```
//!
//! Every key is optional.  Command-line flags win over file values.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use eld_core::hours::CYCLE_LIMIT_HOURS;
use eld_hos::TrailingOffDuty;
use eld_output::ArtifactFormat;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "eld-plan.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root directory rendered logs are written under.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Prefix joined in front of artifact paths in responses.
    #[serde(default = "default_media_url")]
    pub media_url: String,

    /// Extra place table (CSV `name,lat,lon`).
    #[serde(default)]
    pub gazetteer: Option<PathBuf>,

    #[serde(default)]
    pub format: ArtifactFormat,

    #[serde(default)]
    pub trailing_off_duty: TrailingOffDuty,

    #[serde(default = "default_cycle_limit")]
    pub cycle_limit_hours: f64,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("media")
}

fn default_media_url() -> String {
    "/media".to_string()
}

fn default_cycle_limit() -> f64 {
    CYCLE_LIMIT_HOURS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir:        default_output_dir(),
            media_url:         default_media_url(),
            gazetteer:         None,
            format:            ArtifactFormat::default(),
            trailing_off_duty: TrailingOffDuty::default(),
            cycle_limit_hours: default_cycle_limit(),
        }
    }
}

impl Config {
    /// Load `path`, or `./eld-plan.toml` if present, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            return Self::read(fallback);
        }
        Ok(Self::default())
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in config file {}", path.display()))
    }

    /// Apply command-line overrides.
    pub fn merge(mut self, overrides: Overrides) -> Self {
        if let Some(v) = overrides.output_dir {
            self.output_dir = v;
        }
        if let Some(v) = overrides.media_url {
            self.media_url = v;
        }
        if let Some(v) = overrides.gazetteer {
            self.gazetteer = Some(v);
        }
        if let Some(v) = overrides.format {
            self.format = v;
        }
        if let Some(v) = overrides.trailing_off_duty {
            self.trailing_off_duty = v;
        }
        self
    }
}

/// Values given on the command line; `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output_dir:        Option<PathBuf>,
    pub media_url:         Option<String>,
    pub gazetteer:         Option<PathBuf>,
    pub format:            Option<ArtifactFormat>,
    pub trailing_off_duty: Option<TrailingOffDuty>,
}
