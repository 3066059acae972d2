//! CLI integration tests for the analyze command orchestration.
//!
//! Tests cover:
//! - Symbol resolution precedence (flag > config list > discovery)
//! - End-to-end analyze over real CSV files on disk
//! - Dry-run mode leaving the filesystem untouched
//! - Raw data immutability across a run

mod common;

use clap::Parser;
use common::*;
use rangelab::adapters::file_config_adapter::FileConfigAdapter;
use rangelab::cli::{self, Cli};
use rangelab::domain::error::RangelabError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &Path, data_dir: &Path, output_dir: &Path, extra: &str) -> std::path::PathBuf {
    let path = dir.join("rangelab.ini");
    let content = format!(
        "[data]\ndir = {}\n{}\n[output]\ndir = {}\n",
        data_dir.display(),
        extra,
        output_dir.display()
    );
    fs::write(&path, content).unwrap();
    path
}

fn setup_workspace(symbols: &[&str], bar_count: usize) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();

    for symbol in symbols {
        let bars = generate_bars(symbol, "2024-01-01", bar_count, 1.10);
        fs::write(
            data_dir.join(format!("{}_Daily.csv", symbol)),
            bars_to_csv(&bars),
        )
        .unwrap();
    }

    (dir, data_dir)
}

mod symbol_resolution {
    use super::*;

    #[test]
    fn override_wins_and_uppercases() {
        let config = FileConfigAdapter::from_string("[data]\nsymbols = GBPUSD\n").unwrap();
        let port = MockDataPort::new();

        let symbols = cli::resolve_symbols(Some("eurusd"), &config, &port).unwrap();
        assert_eq!(symbols, vec!["EURUSD"]);
    }

    #[test]
    fn config_list_beats_discovery() {
        let config =
            FileConfigAdapter::from_string("[data]\nsymbols = GBPUSD, usdjpy\n").unwrap();
        let port = MockDataPort::new().with_bars("EURUSD", vec![]);

        let symbols = cli::resolve_symbols(None, &config, &port).unwrap();
        assert_eq!(symbols, vec!["GBPUSD", "USDJPY"]);
    }

    #[test]
    fn falls_back_to_directory_discovery() {
        let config = FileConfigAdapter::from_string("").unwrap();
        let port = MockDataPort::new()
            .with_bars("GBPUSD", vec![])
            .with_bars("EURUSD", vec![]);

        let symbols = cli::resolve_symbols(None, &config, &port).unwrap();
        assert_eq!(symbols, vec!["EURUSD", "GBPUSD"]);
    }

    #[test]
    fn blank_config_list_falls_through() {
        let config = FileConfigAdapter::from_string("[data]\nsymbols =  \n").unwrap();
        let port = MockDataPort::new().with_bars("EURUSD", vec![]);

        let symbols = cli::resolve_symbols(None, &config, &port).unwrap();
        assert_eq!(symbols, vec!["EURUSD"]);
    }

    #[test]
    fn malformed_config_list_is_an_error() {
        let config = FileConfigAdapter::from_string("[data]\nsymbols = EURUSD,,GBPUSD\n").unwrap();
        let port = MockDataPort::new();

        let err = cli::resolve_symbols(None, &config, &port).unwrap_err();
        assert!(matches!(err, RangelabError::ConfigInvalid { key, .. } if key == "symbols"));
    }
}

mod analyze_end_to_end {
    use super::*;

    #[test]
    fn writes_artifacts_for_discovered_symbols() {
        let (dir, data_dir) = setup_workspace(&["EURUSD", "GBPUSD"], 30);
        let output_dir = dir.path().join("outputs");
        let config_path = write_config(dir.path(), &data_dir, &output_dir, "");

        let cli = Cli::parse_from([
            "rangelab",
            "analyze",
            "--config",
            config_path.to_str().unwrap(),
        ]);
        let _ = cli::run(cli);

        assert!(output_dir.join("EURUSD_compression_analysis.csv").exists());
        assert!(output_dir.join("GBPUSD_compression_analysis.csv").exists());
    }

    #[test]
    fn symbol_flag_narrows_the_run() {
        let (dir, data_dir) = setup_workspace(&["EURUSD", "GBPUSD"], 30);
        let output_dir = dir.path().join("outputs");
        let config_path = write_config(dir.path(), &data_dir, &output_dir, "");

        let cli = Cli::parse_from([
            "rangelab",
            "analyze",
            "--config",
            config_path.to_str().unwrap(),
            "--symbol",
            "eurusd",
        ]);
        let _ = cli::run(cli);

        assert!(output_dir.join("EURUSD_compression_analysis.csv").exists());
        assert!(!output_dir.join("GBPUSD_compression_analysis.csv").exists());
    }

    #[test]
    fn output_dir_flag_overrides_config() {
        let (dir, data_dir) = setup_workspace(&["EURUSD"], 30);
        let configured = dir.path().join("outputs");
        let overridden = dir.path().join("elsewhere");
        let config_path = write_config(dir.path(), &data_dir, &configured, "");

        let cli = Cli::parse_from([
            "rangelab",
            "analyze",
            "--config",
            config_path.to_str().unwrap(),
            "--output-dir",
            overridden.to_str().unwrap(),
        ]);
        let _ = cli::run(cli);

        assert!(overridden.join("EURUSD_compression_analysis.csv").exists());
        assert!(!configured.exists());
    }

    #[test]
    fn artifact_has_header_and_values() {
        let (dir, data_dir) = setup_workspace(&["EURUSD"], 30);
        let output_dir = dir.path().join("outputs");
        let config_path = write_config(dir.path(), &data_dir, &output_dir, "");

        let cli = Cli::parse_from([
            "rangelab",
            "analyze",
            "--config",
            config_path.to_str().unwrap(),
        ]);
        let _ = cli::run(cli);

        let content =
            fs::read_to_string(output_dir.join("EURUSD_compression_analysis.csv")).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.ends_with(
            "DirectionalEfficiency_5,DirectionalEfficiency_10,DirectionalEfficiency_20"
        ));
        assert_eq!(lines.count(), 30);

        // Steady drift with constant span: the last row has unit compression
        // and unit efficiency.
        let last = content.lines().last().unwrap();
        let fields: Vec<&str> = last.split(',').collect();
        assert_eq!(fields[0], "EURUSD");
        let compression: f64 = fields[6].parse().unwrap();
        assert!((compression - 1.0).abs() < 1e-9);
        let efficiency: f64 = fields[13].parse().unwrap();
        assert!((efficiency - 1.0).abs() < 1e-9);
    }

    #[test]
    fn date_bounds_from_config_filter_rows() {
        let (dir, data_dir) = setup_workspace(&["EURUSD"], 40);
        let output_dir = dir.path().join("outputs");
        let config_path = write_config(
            dir.path(),
            &data_dir,
            &output_dir,
            "start_date = 2024-01-05\nend_date = 2024-02-04\n",
        );

        let cli = Cli::parse_from([
            "rangelab",
            "analyze",
            "--config",
            config_path.to_str().unwrap(),
        ]);
        let _ = cli::run(cli);

        let content =
            fs::read_to_string(output_dir.join("EURUSD_compression_analysis.csv")).unwrap();
        // 31 days inclusive fall inside the bounds.
        assert_eq!(content.lines().count(), 32);
        assert!(content.contains("2024-01-05"));
        assert!(!content.contains("2024-01-04"));
    }

    #[test]
    fn dry_run_writes_nothing() {
        let (dir, data_dir) = setup_workspace(&["EURUSD"], 30);
        let output_dir = dir.path().join("outputs");
        let config_path = write_config(dir.path(), &data_dir, &output_dir, "");

        let cli = Cli::parse_from([
            "rangelab",
            "analyze",
            "--config",
            config_path.to_str().unwrap(),
            "--dry-run",
        ]);
        let _ = cli::run(cli);

        assert!(!output_dir.exists());
    }

    #[test]
    fn raw_data_is_never_modified() {
        let (dir, data_dir) = setup_workspace(&["EURUSD"], 30);
        let output_dir = dir.path().join("outputs");
        let config_path = write_config(dir.path(), &data_dir, &output_dir, "");

        let raw_path = data_dir.join("EURUSD_Daily.csv");
        let before = fs::read_to_string(&raw_path).unwrap();

        let cli = Cli::parse_from([
            "rangelab",
            "analyze",
            "--config",
            config_path.to_str().unwrap(),
        ]);
        let _ = cli::run(cli);

        let after = fs::read_to_string(&raw_path).unwrap();
        assert_eq!(before, after);

        let entries: Vec<_> = fs::read_dir(&data_dir).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn short_history_produces_no_artifact() {
        let (dir, data_dir) = setup_workspace(&["EURUSD"], 10);
        let output_dir = dir.path().join("outputs");
        let config_path = write_config(dir.path(), &data_dir, &output_dir, "");

        let cli = Cli::parse_from([
            "rangelab",
            "analyze",
            "--config",
            config_path.to_str().unwrap(),
        ]);
        let _ = cli::run(cli);

        assert!(!output_dir.exists());
    }
}
