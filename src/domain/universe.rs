//! Symbol universe parsing and validation.
//!
//! Parses symbol lists from configuration and validates that each symbol has
//! enough history for the rolling measurements.

use crate::domain::error::RangelabError;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Longest measurement window (20) plus the prior day the overlap ratio
/// looks back to.
pub const MIN_DAILY_BARS: usize = 21;

#[derive(Debug, Clone)]
pub struct Universe {
    pub symbols: Vec<String>,
}

impl Universe {
    pub fn count(&self) -> usize {
        self.symbols.len()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UniverseError {
    #[error("empty token in symbol list")]
    EmptyToken,

    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(String),
}

pub fn parse_symbols(input: &str) -> Result<Vec<String>, UniverseError> {
    let mut symbols = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(UniverseError::EmptyToken);
        }
        let symbol = trimmed.to_uppercase();
        if seen.contains(&symbol) {
            return Err(UniverseError::DuplicateSymbol(symbol));
        }
        seen.insert(symbol.clone());
        symbols.push(symbol);
    }

    Ok(symbols)
}

pub struct UniverseValidationResult {
    pub universe: Universe,
    pub skipped: Vec<SkippedSymbol>,
}

#[derive(Debug, Clone)]
pub struct SkippedSymbol {
    pub symbol: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone)]
pub enum SkipReason {
    NoData,
    InsufficientBars { bars: usize },
}

pub fn validate_universe(
    data_port: &dyn DataPort,
    symbols: Vec<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<UniverseValidationResult, RangelabError> {
    let mut valid_symbols = Vec::new();
    let mut skipped = Vec::new();

    for symbol in symbols {
        let bars = match data_port.fetch_daily(&symbol, start_date, end_date) {
            Ok(bars) => bars,
            Err(e) => {
                eprintln!("Warning: skipping {} ({})", symbol, e);
                skipped.push(SkippedSymbol {
                    symbol: symbol.clone(),
                    reason: SkipReason::NoData,
                });
                continue;
            }
        };

        if bars.is_empty() {
            eprintln!("Warning: skipping {} (no data found)", symbol);
            skipped.push(SkippedSymbol {
                symbol: symbol.clone(),
                reason: SkipReason::NoData,
            });
            continue;
        }

        if bars.len() < MIN_DAILY_BARS {
            eprintln!(
                "Warning: skipping {} (only {} bars, minimum {} required)",
                symbol,
                bars.len(),
                MIN_DAILY_BARS
            );
            skipped.push(SkippedSymbol {
                symbol: symbol.clone(),
                reason: SkipReason::InsufficientBars { bars: bars.len() },
            });
            continue;
        }

        eprintln!("  {}: {} bars [OK]", symbol, bars.len());
        valid_symbols.push(symbol);
    }

    if valid_symbols.is_empty() {
        return Err(RangelabError::InsufficientData {
            symbol: "all".to_string(),
            bars: 0,
            minimum: MIN_DAILY_BARS,
        });
    }

    if !skipped.is_empty() {
        eprintln!(
            "Analyzing {} of {} symbols",
            valid_symbols.len(),
            valid_symbols.len() + skipped.len()
        );
    }

    Ok(UniverseValidationResult {
        universe: Universe {
            symbols: valid_symbols,
        },
        skipped,
    })
}
