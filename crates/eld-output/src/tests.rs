//! Tests for eld-output.

#[cfg(test)]
mod helpers {
    use eld_hos::DayPlan;

    /// The three days of a 25 h / 4 h-used / 500 mi trip.
    pub fn days() -> Vec<DayPlan> {
        eld_hos::segment(25.0, 4.0, 500.0).expect("valid inputs")
    }
}

// ── Naming ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod naming {
    use std::path::PathBuf;

    use eld_core::TripId;

    use crate::{ArtifactFormat, ArtifactNaming, OutputError};

    #[test]
    fn default_pattern() {
        let p = ArtifactNaming::default().path(TripId(17), 2, "svg");
        assert_eq!(p.file_name(), "eld_log_17_day_2.svg");
        assert_eq!(p.relative(), PathBuf::from("eld_logs").join("eld_log_17_day_2.svg"));
        assert_eq!(p.to_string(), "eld_logs/eld_log_17_day_2.svg");
    }

    #[test]
    fn url_joins_prefix_once() {
        let p = ArtifactNaming::default().path(TripId(3), 1, "csv");
        assert_eq!(p.url("/media"), "/media/eld_logs/eld_log_3_day_1.csv");
        assert_eq!(p.url("/media/"), "/media/eld_logs/eld_log_3_day_1.csv");
    }

    #[test]
    fn custom_category() {
        let naming = ArtifactNaming { category: "paper_logs".into(), artifact: "paper_log".into() };
        assert_eq!(naming.path(TripId(9), 4, "csv").to_string(), "paper_logs/paper_log_9_day_4.csv");
    }

    #[test]
    fn format_parse() {
        assert_eq!("CSV".parse::<ArtifactFormat>().unwrap(), ArtifactFormat::Csv);
        assert_eq!(" svg ".parse::<ArtifactFormat>().unwrap(), ArtifactFormat::Svg);
        assert_eq!("none".parse::<ArtifactFormat>().unwrap(), ArtifactFormat::None);
        assert!(matches!("png".parse::<ArtifactFormat>(), Err(OutputError::UnknownFormat(_))));
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use eld_core::TripId;

    use crate::{ArtifactNaming, CsvLogRenderer, LogRenderer};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_records(path: &std::path::Path) -> Vec<Vec<String>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .unwrap();
        rdr.records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect()
    }

    #[test]
    fn one_file_per_day() {
        let dir = tmp();
        let mut r = CsvLogRenderer::new(dir.path(), ArtifactNaming::default()).unwrap();
        for day in super::helpers::days() {
            let path = r.render_day(TripId(5), &day).unwrap();
            assert!(dir.path().join(path.relative()).exists());
        }
        r.finish().unwrap();
        r.finish().unwrap();
        assert!(dir.path().join("eld_logs/eld_log_5_day_3.csv").exists());
    }

    #[test]
    fn form_contents() {
        let dir = tmp();
        let mut r = CsvLogRenderer::new(dir.path(), ArtifactNaming::default()).unwrap();
        let days = super::helpers::days();
        let path = r.render_day(TripId(5), &days[0]).unwrap();

        let rows = read_records(&dir.path().join(path.relative()));
        assert_eq!(rows[0], ["trip", "5"]);
        assert_eq!(rows[1], ["day", "1"]);
        assert_eq!(rows[2], ["distance_miles", "220.00"]);
        assert_eq!(rows[3], ["drive_time_hours", "11.00"]);
        assert_eq!(rows[4], ["total_time_hours", "13.00"]);
        assert_eq!(rows[5], ["status", "start_hour", "end_hour", "duration_hours"]);
        assert_eq!(rows[6], ["Off Duty", "0.00", "4.00", "4.00"]);
        assert_eq!(rows[7], ["Driving", "4.00", "5.00", "1.00"]);
        assert_eq!(rows[8], ["On Duty", "5.00", "16.00", "11.00"]);
        assert_eq!(rows[9], ["Off Duty", "17.00", "17.00", "0.00"]);
        assert_eq!(rows.len(), 10);
    }

    #[test]
    fn missing_root_is_created() {
        let dir = tmp();
        let root = dir.path().join("nested/media");
        let _r = CsvLogRenderer::new(&root, ArtifactNaming::default()).unwrap();
        assert!(root.join("eld_logs").is_dir());
    }
}

// ── SVG ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod svg_tests {
    use eld_core::TripId;

    use crate::svg::render_svg;
    use crate::{ArtifactNaming, LogRenderer, SvgLogRenderer};

    #[test]
    fn document_shape() {
        let days = super::helpers::days();
        let svg = render_svg(TripId(1), &days[1]).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("ELD Log - Day 2"));
        for label in ["Off Duty", "Sleeper Berth", "Driving", "On Duty"] {
            assert!(svg.contains(label), "missing row {label}");
        }
    }

    #[test]
    fn one_stroke_per_segment() {
        let days = super::helpers::days();
        let svg = render_svg(TripId(1), &days[0]).unwrap();
        let strokes = svg.matches(r#"stroke-width="3""#).count();
        assert_eq!(strokes, days[0].segments.len());
    }

    #[test]
    fn gap_is_not_bridged() {
        // Day 1: OnDuty ends at 16, trailing OffDuty starts at 17, so one
        // connector each for Off→Driving and Driving→OnDuty only.
        let days = super::helpers::days();
        let svg = render_svg(TripId(1), &days[0]).unwrap();
        assert_eq!(svg.matches(r#"stroke-width="2""#).count(), 2);
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = SvgLogRenderer::new(dir.path(), ArtifactNaming::default()).unwrap();
        let days = super::helpers::days();
        let path = r.render_day(TripId(8), &days[2]).unwrap();
        let body = std::fs::read_to_string(dir.path().join(path.relative())).unwrap();
        assert!(body.contains("Day 3"));
        assert_eq!(path.file_name(), "eld_log_8_day_3.svg");
    }
}

// ── Null / factory ────────────────────────────────────────────────────────────

#[cfg(test)]
mod null_renderer {
    use eld_core::TripId;

    use crate::{renderer_for, ArtifactFormat, ArtifactNaming, LogRenderer, NullRenderer};

    #[test]
    fn computes_paths_without_writing() {
        let mut r = NullRenderer::new(ArtifactNaming::default(), ArtifactFormat::Csv);
        let days = super::helpers::days();
        let p = r.render_day(TripId(2), &days[0]).unwrap();
        assert_eq!(p.to_string(), "eld_logs/eld_log_2_day_1.csv");
    }

    #[test]
    fn default_null_uses_svg_extension() {
        let mut r = NullRenderer::default();
        let days = super::helpers::days();
        let p = r.render_day(TripId(2), &days[0]).unwrap();
        assert_eq!(p.ext, "svg");
    }

    #[test]
    fn default_null_matches_explicit_svg() {
        let days = super::helpers::days();
        let by_default = NullRenderer::default().render_day(TripId(7), &days[1]).unwrap();
        let explicit = NullRenderer::new(ArtifactNaming::default(), ArtifactFormat::Svg)
            .render_day(TripId(7), &days[1])
            .unwrap();
        assert_eq!(by_default, explicit);
        assert_eq!(by_default.to_string(), "eld_logs/eld_log_7_day_2.svg");
    }

    #[test]
    fn factory_none_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = renderer_for(ArtifactFormat::None, dir.path(), ArtifactNaming::default()).unwrap();
        let days = super::helpers::days();
        r.render_day(TripId(1), &days[0]).unwrap();
        assert!(!dir.path().join("eld_logs").exists());
    }

    #[test]
    fn factory_csv_writes() {
        let dir = tempfile::tempdir().unwrap();
        let mut r = renderer_for(ArtifactFormat::Csv, dir.path(), ArtifactNaming::default()).unwrap();
        let days = super::helpers::days();
        let p = r.render_day(TripId(1), &days[0]).unwrap();
        assert!(dir.path().join(p.relative()).exists());
    }
}
