//! `eld-plan` — trip planning and ELD log drawing from the command line.
//!
//! ```text
//! eld-plan plan --current "Chicago, IL" --pickup "St. Louis, MO" \
//!               --dropoff "Dallas, TX" --cycle-used 12 --format csv
//! eld-plan segment --total-time 25 --cycle-used 4 --distance 500
//! eld-plan check --total-time 30 --cycle-used 45
//! ```
//!
//! Results go to stdout; logs go to stderr.

mod cli;
mod commands;
mod config;
mod hubs;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    commands::execute(cli)
}
