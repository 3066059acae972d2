//! Analysis configuration and its validation.
//!
//! Validates all config fields before the pipeline touches the filesystem.

use crate::domain::error::RangelabError;
use crate::domain::universe::parse_symbols;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Resolved settings for one analysis run. Both date bounds are optional;
/// an unset bound means the full extent of the raw files.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

pub fn build_analysis_config(config: &dyn ConfigPort) -> Result<AnalysisConfig, RangelabError> {
    let data_dir = config
        .get_string("data", "dir")
        .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
    let output_dir = config
        .get_string("output", "dir")
        .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

    let start_date = parse_optional_date(config, "start_date")?;
    let end_date = parse_optional_date(config, "end_date")?;

    Ok(AnalysisConfig {
        data_dir: PathBuf::from(data_dir),
        output_dir: PathBuf::from(output_dir),
        start_date,
        end_date,
    })
}

pub fn validate_analysis_config(config: &dyn ConfigPort) -> Result<(), RangelabError> {
    validate_dirs(config)?;
    validate_dates(config)?;
    validate_symbols(config)?;
    Ok(())
}

fn validate_dirs(config: &dyn ConfigPort) -> Result<(), RangelabError> {
    for (section, key) in [("data", "dir"), ("output", "dir")] {
        if let Some(value) = config.get_string(section, key) {
            if value.trim().is_empty() {
                return Err(RangelabError::ConfigInvalid {
                    section: section.to_string(),
                    key: key.to_string(),
                    reason: format!("{} must not be empty", key),
                });
            }
        }
    }
    Ok(())
}

fn validate_dates(config: &dyn ConfigPort) -> Result<(), RangelabError> {
    let start_date = parse_optional_date(config, "start_date")?;
    let end_date = parse_optional_date(config, "end_date")?;

    if let (Some(start), Some(end)) = (start_date, end_date) {
        if start >= end {
            return Err(RangelabError::ConfigInvalid {
                section: "data".to_string(),
                key: "start_date".to_string(),
                reason: "start_date must be before end_date".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_symbols(config: &dyn ConfigPort) -> Result<(), RangelabError> {
    if let Some(symbols) = config.get_string("data", "symbols") {
        parse_symbols(&symbols).map_err(|e| RangelabError::ConfigInvalid {
            section: "data".to_string(),
            key: "symbols".to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

fn parse_optional_date(
    config: &dyn ConfigPort,
    key: &str,
) -> Result<Option<NaiveDate>, RangelabError> {
    match config.get_string("data", key) {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| RangelabError::ConfigInvalid {
                section: "data".to_string(),
                key: key.to_string(),
                reason: format!("invalid {} format, expected YYYY-MM-DD", key),
            }),
    }
}
