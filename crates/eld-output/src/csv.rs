//! CSV log-form backend.
//!
//! Each day becomes one small CSV laid out like the header block and duty
//! grid of a paper log:
//!
//! ```csv
//! trip,17
//! day,1
//! distance_miles,220.00
//! drive_time_hours,11.00
//! total_time_hours,13.00
//! status,start_hour,end_hour,duration_hours
//! Off Duty,0.00,4.00,4.00
//! Driving,4.00,5.00,1.00
//! ...
//! ```
//!
//! The header block has two fields per record and the grid four, so the
//! writer is built `flexible`.

use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::debug;

use eld_core::TripId;
use eld_hos::DayPlan;

use crate::renderer::LogRenderer;
use crate::{ArtifactNaming, ArtifactPath, OutputResult};

/// Writes one CSV log form per day under `{root}/{category}/`.
pub struct CsvLogRenderer {
    root:   PathBuf,
    naming: ArtifactNaming,
}

impl CsvLogRenderer {
    /// Create the `{root}/{category}` directory if needed.
    pub fn new(root: &Path, naming: ArtifactNaming) -> OutputResult<Self> {
        std::fs::create_dir_all(root.join(&naming.category))?;
        Ok(Self { root: root.to_path_buf(), naming })
    }
}

impl LogRenderer for CsvLogRenderer {
    fn render_day(&mut self, trip_id: TripId, day: &DayPlan) -> OutputResult<ArtifactPath> {
        let artifact = self.naming.path(trip_id, day.day_index, "csv");
        let file = self.root.join(artifact.relative());

        let mut w = WriterBuilder::new().flexible(true).from_path(&file)?;
        w.write_record(["trip", trip_id.to_string().as_str()])?;
        w.write_record(["day", day.day_index.to_string().as_str()])?;
        w.write_record(["distance_miles", fmt2(day.distance).as_str()])?;
        w.write_record(["drive_time_hours", fmt2(day.drive_time).as_str()])?;
        w.write_record(["total_time_hours", fmt2(day.total_time).as_str()])?;

        w.write_record(["status", "start_hour", "end_hour", "duration_hours"])?;
        for seg in &day.segments {
            w.write_record([
                seg.status.label(),
                fmt2(seg.start_hour).as_str(),
                fmt2(seg.end_hour).as_str(),
                fmt2(seg.duration()).as_str(),
            ])?;
        }
        w.flush()?;

        debug!(path = %file.display(), "csv log written");
        Ok(artifact)
    }
}

fn fmt2(v: f64) -> String {
    format!("{v:.2}")
}
