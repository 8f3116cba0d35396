//! Tests for the eld-plan binary.

#[cfg(test)]
mod config {
    use std::path::PathBuf;

    use eld_hos::TrailingOffDuty;
    use eld_output::ArtifactFormat;

    use crate::config::{Config, Overrides};

    #[test]
    fn empty_file_is_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.output_dir, PathBuf::from("media"));
        assert_eq!(cfg.media_url, "/media");
        assert_eq!(cfg.format, ArtifactFormat::Svg);
        assert_eq!(cfg.cycle_limit_hours, 70.0);
    }

    #[test]
    fn full_file() {
        let cfg = Config::from_toml(
            r#"
            output_dir        = "/srv/eld"
            media_url         = "https://cdn.example.com/logs"
            gazetteer         = "places.csv"
            format            = "csv"
            trailing_off_duty = "end_of_day"
            cycle_limit_hours = 60.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("/srv/eld"));
        assert_eq!(cfg.gazetteer, Some(PathBuf::from("places.csv")));
        assert_eq!(cfg.format, ArtifactFormat::Csv);
        assert_eq!(cfg.trailing_off_duty, TrailingOffDuty::EndOfDay);
        assert_eq!(cfg.cycle_limit_hours, 60.0);
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(Config::from_toml("outptu_dir = \"x\"").is_err());
    }

    #[test]
    fn bad_format_rejected() {
        assert!(Config::from_toml("format = \"png\"").is_err());
    }

    #[test]
    fn overrides_win() {
        let cfg = Config::from_toml("format = \"csv\"\nmedia_url = \"/a\"").unwrap();
        let merged = cfg.merge(Overrides {
            format: Some(ArtifactFormat::None),
            output_dir: Some(PathBuf::from("out")),
            ..Overrides::default()
        });
        assert_eq!(merged.format, ArtifactFormat::None);
        assert_eq!(merged.output_dir, PathBuf::from("out"));
        assert_eq!(merged.media_url, "/a");
    }

    #[test]
    fn load_reads_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eld.toml");
        std::fs::write(&path, "media_url = \"/logs\"\n").unwrap();
        let cfg = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.media_url, "/logs");
    }

    #[test]
    fn load_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(dir.path().join("nope.toml").as_path())).is_err());
    }
}

// ── Hubs ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod hubs {
    use eld_core::GeoPoint;

    #[test]
    fn builtin_table_parses() {
        let g = crate::hubs::builtin().unwrap();
        assert!(g.len() >= 40);
        assert!(g.get("chicago, il").is_some());
        assert!(g.get("St. Louis, MO").is_some());
    }

    #[test]
    fn extra_table_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("places.csv");
        std::fs::write(&path, "name,lat,lon\n\"Chicago, IL\",41.0,-87.0\nYard 7,35.0,-90.0\n").unwrap();

        let g = crate::hubs::load(Some(path.as_path())).unwrap();
        assert_eq!(g.get("Chicago, IL"), Some(GeoPoint::new(41.0, -87.0)));
        assert_eq!(g.get("yard 7"), Some(GeoPoint::new(35.0, -90.0)));
        assert!(g.get("Dallas, TX").is_some());
    }

    #[test]
    fn missing_extra_table_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(crate::hubs::load(Some(dir.path().join("none.csv").as_path())).is_err());
    }
}

// ── Argument parsing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod args {
    use clap::Parser;

    use eld_hos::TrailingOffDuty;
    use eld_output::ArtifactFormat;

    use crate::cli::{Cli, Command};

    #[test]
    fn plan_flags() {
        let cli = Cli::try_parse_from([
            "eld-plan", "plan",
            "--current", "Chicago, IL",
            "--pickup", "St. Louis, MO",
            "--dropoff", "Dallas, TX",
            "--cycle-used", "12.5",
            "--format", "csv",
            "--trip-id", "42",
        ])
        .unwrap();
        let Command::Plan(args) = cli.command else { panic!("expected plan") };
        assert_eq!(args.current, "Chicago, IL");
        assert_eq!(args.cycle_used, 12.5);
        assert_eq!(args.trip_id, Some(42));
        assert_eq!(args.output.format, Some(ArtifactFormat::Csv));
    }

    #[test]
    fn plan_requires_locations() {
        assert!(Cli::try_parse_from(["eld-plan", "plan", "--current", "X"]).is_err());
    }

    #[test]
    fn segment_accepts_negative_input() {
        let cli = Cli::try_parse_from([
            "eld-plan", "-vv", "segment", "--total-time", "-3", "--trailing-off-duty", "end-of-day",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Segment(args) = cli.command else { panic!("expected segment") };
        assert_eq!(args.total_time, -3.0);
        assert_eq!(args.distance, 0.0);
        assert_eq!(args.trailing_off_duty, Some(TrailingOffDuty::EndOfDay));
    }

    #[test]
    fn unknown_format_rejected() {
        let res = Cli::try_parse_from([
            "eld-plan", "plan", "--current", "a", "--pickup", "b", "--dropoff", "c", "--format", "gif",
        ]);
        assert!(res.is_err());
    }
}

// ── Text output ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod text {
    use eld_hos::ComplianceChecker;

    use crate::commands::{day_table, report_text};

    #[test]
    fn day_table_lists_days_and_segments() {
        let days = eld_hos::segment(25.0, 4.0, 500.0).unwrap();
        let table = day_table(&days).unwrap();
        assert_eq!(table.matches("Day ").count(), 3);
        assert!(table.contains("Off Duty"));
        assert!(table.contains("On Duty"));
        assert!(table.contains("220.0 mi"));
    }

    #[test]
    fn empty_table() {
        assert_eq!(day_table(&[]).unwrap(), "no log days\n");
    }

    #[test]
    fn report_mentions_excess() {
        let report = ComplianceChecker::default().report(30.0, 45.0);
        let text = report_text(&report);
        assert!(text.starts_with("Warning: Trip exceeds 70-hr cycle limit"));
        assert!(text.contains("remaining cycle hours: 25.00"));
        assert!(text.contains("over by: 5.00 h"));
    }

    #[test]
    fn report_compliant() {
        let text = report_text(&ComplianceChecker::default().report(10.0, 0.0));
        assert!(text.starts_with("Trip is within HOS limits"));
        assert!(!text.contains("over by"));
    }
}
