//! Subcommand implementations.

use std::fmt::Write as _;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use eld_core::TripId;
use eld_hos::{ComplianceChecker, ComplianceReport, DayPlan, DaySegmenter, SegmenterConfig};
use eld_output::{renderer_for, ArtifactNaming};
use eld_route::Gazetteer;
use eld_trip::{ErrorBody, TripPlanner, TripPlannerBuilder, TripRequest, TripResponse};

use crate::cli::{BatchArgs, CheckArgs, Cli, Command, PlanArgs, SegmentArgs};
use crate::config::Config;
use crate::hubs;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Plan(args) => plan(config, args),
        Command::Batch(args) => batch(config, args),
        Command::Segment(args) => segment(&config, args),
        Command::Check(args) => check(&config, args),
    }
}

// ── plan / batch ──────────────────────────────────────────────────────────────

fn build_planner(config: &Config) -> Result<TripPlanner<Gazetteer>> {
    let gazetteer = hubs::load(config.gazetteer.as_deref())?;
    let planner = TripPlannerBuilder::new(gazetteer)
        .segmenter_config(SegmenterConfig { trailing_off_duty: config.trailing_off_duty })
        .compliance(ComplianceChecker::new(config.cycle_limit_hours))
        .media_url(config.media_url.clone())
        .build()?;
    Ok(planner)
}

fn plan(config: Config, args: PlanArgs) -> Result<()> {
    let config = config.merge(args.output.into());
    let planner = build_planner(&config)?;
    let request = TripRequest::new(args.current, args.pickup, args.dropoff, args.cycle_used);
    let trip_id = args.trip_id.map(TripId).unwrap_or_else(default_trip_id);

    let planned = match planner.plan(&request) {
        Ok(planned) => planned,
        Err(err) => {
            print_json(&err.body())?;
            return Err(anyhow::Error::new(err).context("trip could not be planned"));
        }
    };

    let mut renderer = renderer_for(config.format, &config.output_dir, ArtifactNaming::default())
        .with_context(|| format!("cannot write logs under {}", config.output_dir.display()))?;
    let response = planner
        .render(&planned, trip_id, &mut renderer)
        .context("failed to render ELD logs")?;

    info!(%trip_id, days = response.eld_logs.len(), "trip written");
    print_json(&response)
}

/// One element of the `batch` output array.
#[derive(Serialize)]
#[serde(untagged)]
enum BatchEntry {
    Planned {
        trip_id:  TripId,
        #[serde(flatten)]
        response: TripResponse,
    },
    Failed(ErrorBody),
}

fn batch(config: Config, args: BatchArgs) -> Result<()> {
    let config = config.merge(args.output.into());
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let requests: Vec<TripRequest> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of trip requests", args.input.display()))?;

    let planner = build_planner(&config)?;
    let mut renderer = renderer_for(config.format, &config.output_dir, ArtifactNaming::default())
        .with_context(|| format!("cannot write logs under {}", config.output_dir.display()))?;

    let mut entries = Vec::with_capacity(requests.len());
    let mut failed = 0usize;
    let mut trip_id = TripId(args.first_trip_id);
    for (i, result) in planner.plan_batch(&requests).into_iter().enumerate() {
        let entry = match result.and_then(|p| planner.render(&p, trip_id, &mut renderer)) {
            Ok(response) => BatchEntry::Planned { trip_id, response },
            Err(err) => {
                warn!(index = i, error = %err, "trip skipped");
                failed += 1;
                BatchEntry::Failed(err.body())
            }
        };
        entries.push(entry);
        trip_id = trip_id.next();
    }

    info!(trips = requests.len(), failed, "batch finished");
    print_json(&entries)
}

fn default_trip_id() -> TripId {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(1);
    TripId(secs)
}

// ── segment / check ───────────────────────────────────────────────────────────

fn segment(config: &Config, args: SegmentArgs) -> Result<()> {
    let trailing_off_duty = args.trailing_off_duty.unwrap_or(config.trailing_off_duty);
    let segmenter = DaySegmenter::new(SegmenterConfig { trailing_off_duty });
    let days = segmenter.segment(args.total_time, args.cycle_used, args.distance)?;

    if args.json {
        print_json(&days)
    } else {
        print!("{}", day_table(&days)?);
        Ok(())
    }
}

fn check(config: &Config, args: CheckArgs) -> Result<()> {
    let checker = ComplianceChecker::new(config.cycle_limit_hours);
    let report = checker.report(args.total_time, args.cycle_used);

    if args.json {
        print_json(&report)
    } else {
        print!("{}", report_text(&report));
        Ok(())
    }
}

// ── Formatting ────────────────────────────────────────────────────────────────

/// Plain-text table of `days` and their segments.
pub(crate) fn day_table(days: &[DayPlan]) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    if days.is_empty() {
        writeln!(out, "no log days")?;
        return Ok(out);
    }
    for day in days {
        writeln!(
            out,
            "Day {:<3} drive {:>6.2} h   total {:>6.2} h   distance {:>8.1} mi",
            day.day_index, day.drive_time, day.total_time, day.distance
        )?;
        for seg in &day.segments {
            writeln!(
                out,
                "    {:<9} {:>6.2} -> {:>6.2}",
                seg.status.label(),
                seg.start_hour,
                seg.end_hour
            )?;
        }
    }
    Ok(out)
}

pub(crate) fn report_text(report: &ComplianceReport) -> String {
    let mut out = format!(
        "{}\nremaining cycle hours: {:.2}\n",
        report.verdict, report.remaining_hours
    );
    if let Some(excess) = report.excess_hours {
        out.push_str(&format!("over by: {excess:.2} h\n"));
    }
    out
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    println!("{text}");
    Ok(())
}
