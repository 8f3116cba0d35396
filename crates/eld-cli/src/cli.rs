//! Command-line arguments for `eld-plan`.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use eld_hos::TrailingOffDuty;
use eld_output::ArtifactFormat;

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(name = "eld-plan")]
#[command(version, about = "Plan truck trips and draw their daily ELD logs", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (default: ./eld-plan.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Geocode, route, segment, and render one trip; prints the JSON response
    Plan(PlanArgs),

    /// Plan every request in a JSON array file; prints a JSON array
    Batch(BatchArgs),

    /// Split a trip duration into log days without routing
    Segment(SegmentArgs),

    /// Check a trip duration against the 70-hour cycle
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Where the driver is now ("City, ST" or "lat, lon")
    #[arg(long)]
    pub current: String,

    /// Pickup location
    #[arg(long)]
    pub pickup: String,

    /// Dropoff location
    #[arg(long)]
    pub dropoff: String,

    /// Hours already used in the current cycle
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub cycle_used: f64,

    /// Numeric trip id used in artifact names (default: current Unix time)
    #[arg(long)]
    pub trip_id: Option<u64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON file holding an array of trip requests
    pub input: PathBuf,

    /// Id of the first trip; later trips count up from it
    #[arg(long, default_value_t = 1)]
    pub first_trip_id: u64,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct SegmentArgs {
    /// Total trip hours
    #[arg(long, allow_negative_numbers = true)]
    pub total_time: f64,

    /// Hours already used in the current cycle
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub cycle_used: f64,

    /// Total trip miles
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub distance: f64,

    /// End of the trailing Off-Duty segment: daily_time or end_of_day
    #[arg(long)]
    pub trailing_off_duty: Option<TrailingOffDuty>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Total trip hours
    #[arg(long, allow_negative_numbers = true)]
    pub total_time: f64,

    /// Hours already used in the current cycle
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub cycle_used: f64,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Flags shared by the commands that render logs.
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Artifact format: csv, svg, or none
    #[arg(long)]
    pub format: Option<ArtifactFormat>,

    /// Root directory for rendered logs
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Prefix for artifact URLs in the response
    #[arg(long)]
    pub media_url: Option<String>,

    /// Extra gazetteer CSV (name,lat,lon)
    #[arg(long)]
    pub gazetteer: Option<PathBuf>,

    /// End of the trailing Off-Duty segment: daily_time or end_of_day
    #[arg(long)]
    pub trailing_off_duty: Option<TrailingOffDuty>,
}

impl From<OutputArgs> for Overrides {
    fn from(args: OutputArgs) -> Self {
        Overrides {
            output_dir:        args.output_dir,
            media_url:         args.media_url,
            gazetteer:         args.gazetteer,
            format:            args.format,
            trailing_off_duty: args.trailing_off_duty,
        }
    }
}
