//! SVG log-graph backend.
//!
//! Draws the familiar four-line duty grid (Off Duty, Sleeper Berth, Driving,
//! On Duty) with one horizontal stroke per segment.  Consecutive segments
//! that touch are joined by a vertical stroke; gaps stay open.
//!
//! The x axis spans 24 hours, widened to the last segment end when a day-1
//! timeline runs past midnight (large `cycle_used`).

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::debug;

use eld_core::hours::HOURS_PER_DAY;
use eld_core::TripId;
use eld_hos::{DayPlan, DutyStatus};

use crate::renderer::LogRenderer;
use crate::{ArtifactNaming, ArtifactPath, OutputResult};

// ── Layout ────────────────────────────────────────────────────────────────────

const WIDTH:       f64 = 1_000.0;
const HEIGHT:      f64 = 260.0;
const GRID_LEFT:   f64 = 120.0;
const GRID_TOP:    f64 = 50.0;
const GRID_WIDTH:  f64 = 840.0;
const ROW_HEIGHT:  f64 = 40.0;

/// Grid rows top to bottom.  Sleeper Berth is printed but never drawn on.
const ROWS: [(&str, Option<DutyStatus>); 4] = [
    ("Off Duty", Some(DutyStatus::OffDuty)),
    ("Sleeper Berth", None),
    ("Driving", Some(DutyStatus::Driving)),
    ("On Duty", Some(DutyStatus::OnDuty)),
];

// ── SvgLogRenderer ────────────────────────────────────────────────────────────

/// Writes one SVG log graph per day under `{root}/{category}/`.
pub struct SvgLogRenderer {
    root:   PathBuf,
    naming: ArtifactNaming,
}

impl SvgLogRenderer {
    /// Create the `{root}/{category}` directory if needed.
    pub fn new(root: &Path, naming: ArtifactNaming) -> OutputResult<Self> {
        std::fs::create_dir_all(root.join(&naming.category))?;
        Ok(Self { root: root.to_path_buf(), naming })
    }
}

impl LogRenderer for SvgLogRenderer {
    fn render_day(&mut self, trip_id: TripId, day: &DayPlan) -> OutputResult<ArtifactPath> {
        let artifact = self.naming.path(trip_id, day.day_index, "svg");
        let file = self.root.join(artifact.relative());

        let svg = render_svg(trip_id, day)?;
        std::fs::write(&file, svg)?;

        debug!(path = %file.display(), "svg log written");
        Ok(artifact)
    }
}

// ── Drawing ───────────────────────────────────────────────────────────────────

/// Render `day` as a standalone SVG document.
pub fn render_svg(trip_id: TripId, day: &DayPlan) -> Result<String, std::fmt::Error> {
    let span = day
        .segments
        .iter()
        .map(|s| s.end_hour)
        .fold(HOURS_PER_DAY, f64::max)
        .ceil();
    let x = |hour: f64| GRID_LEFT + hour / span * GRID_WIDTH;

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    writeln!(
        out,
        r#"<text x="{GRID_LEFT}" y="24" font-family="sans-serif" font-size="16">ELD Log - Day {} (trip {trip_id})</text>"#,
        day.day_index
    )?;

    // Rows and labels.
    for (i, (label, _)) in ROWS.iter().enumerate() {
        let top = GRID_TOP + i as f64 * ROW_HEIGHT;
        writeln!(
            out,
            r##"<rect x="{GRID_LEFT}" y="{top}" width="{GRID_WIDTH}" height="{ROW_HEIGHT}" fill="none" stroke="#999"/>"##
        )?;
        writeln!(
            out,
            r#"<text x="8" y="{:.1}" font-family="sans-serif" font-size="12">{label}</text>"#,
            top + ROW_HEIGHT * 0.6
        )?;
    }

    // Hour ticks.
    let bottom = GRID_TOP + ROWS.len() as f64 * ROW_HEIGHT;
    let step = (span / HOURS_PER_DAY).ceil().max(1.0) as usize;
    for hour in (0..=span as usize).step_by(step) {
        let hx = x(hour as f64);
        writeln!(
            out,
            r##"<line x1="{hx:.1}" y1="{GRID_TOP}" x2="{hx:.1}" y2="{bottom}" stroke="#ddd"/>"##
        )?;
        writeln!(
            out,
            r#"<text x="{hx:.1}" y="{:.1}" font-family="sans-serif" font-size="10" text-anchor="middle">{hour}</text>"#,
            bottom + 14.0
        )?;
    }

    // Duty strokes.
    let mut prev: Option<(f64, f64)> = None;
    for seg in &day.segments {
        let y = row_center(seg.status);
        let (x1, x2) = (x(seg.start_hour), x(seg.end_hour));
        if let Some((prev_end, prev_y)) = prev {
            if prev_end == seg.start_hour && prev_y != y {
                writeln!(
                    out,
                    r##"<line x1="{x1:.1}" y1="{prev_y:.1}" x2="{x1:.1}" y2="{y:.1}" stroke="#1f4e9c" stroke-width="2"/>"##
                )?;
            }
        }
        writeln!(
            out,
            r##"<line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="#1f4e9c" stroke-width="3"/>"##
        )?;
        prev = Some((seg.end_hour, y));
    }

    writeln!(
        out,
        r#"<text x="{GRID_LEFT}" y="{:.1}" font-family="sans-serif" font-size="12">Distance {:.1} mi · Driving {:.2} h · Total {:.2} h</text>"#,
        bottom + 34.0,
        day.distance,
        day.drive_time,
        day.total_time
    )?;
    writeln!(out, "</svg>")?;
    Ok(out)
}

fn row_center(status: DutyStatus) -> f64 {
    let row = ROWS
        .iter()
        .position(|(_, s)| *s == Some(status))
        .unwrap_or(0);
    GRID_TOP + (row as f64 + 0.5) * ROW_HEIGHT
}
