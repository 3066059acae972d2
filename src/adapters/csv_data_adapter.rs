//! CSV file data adapter.
//!
//! Reads one `<SYMBOL>_Daily.csv` per symbol from the data directory. Files
//! are immutable ground truth; the adapter only ever opens them read-only.
//! Columns are located by header name, so raw exports may carry extra
//! columns (Symbol, MarketState, volume feeds) in any order.

use crate::domain::bar::DailyBar;
use crate::domain::error::RangelabError;
use crate::domain::market_state::MarketState;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use csv::StringRecord;
use std::fs;
use std::path::{Path, PathBuf};

pub const DAILY_FILE_SUFFIX: &str = "_Daily.csv";

pub struct CsvDataAdapter {
    base_path: PathBuf,
}

impl CsvDataAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}{}", symbol, DAILY_FILE_SUFFIX))
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

fn required_column(
    headers: &StringRecord,
    name: &str,
    path: &Path,
) -> Result<usize, RangelabError> {
    column_index(headers, name).ok_or_else(|| RangelabError::Data {
        reason: format!("{}: missing {} column", path.display(), name),
    })
}

fn parse_price(
    record: &StringRecord,
    idx: usize,
    name: &str,
    path: &Path,
) -> Result<f64, RangelabError> {
    record
        .get(idx)
        .ok_or_else(|| RangelabError::Data {
            reason: format!("{}: row is missing the {} field", path.display(), name),
        })?
        .trim()
        .parse()
        .map_err(|e| RangelabError::Data {
            reason: format!("{}: invalid {} value: {}", path.display(), name, e),
        })
}

impl DataPort for CsvDataAdapter {
    fn fetch_daily(
        &self,
        symbol: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<DailyBar>, RangelabError> {
        let path = self.csv_path(symbol);
        let mut rdr = csv::Reader::from_path(&path).map_err(|e| RangelabError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let headers = rdr
            .headers()
            .map_err(|e| RangelabError::Data {
                reason: format!("{}: {}", path.display(), e),
            })?
            .clone();

        let date_col = required_column(&headers, "Date", &path)?;
        let open_col = required_column(&headers, "Open", &path)?;
        let high_col = required_column(&headers, "High", &path)?;
        let low_col = required_column(&headers, "Low", &path)?;
        let close_col = required_column(&headers, "Close", &path)?;
        let state_col = column_index(&headers, "MarketState");

        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| RangelabError::Data {
                reason: format!("{}: {}", path.display(), e),
            })?;

            let date_str = record.get(date_col).ok_or_else(|| RangelabError::Data {
                reason: format!("{}: row is missing the Date field", path.display()),
            })?;
            let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|e| {
                RangelabError::Data {
                    reason: format!("{}: invalid date {:?}: {}", path.display(), date_str, e),
                }
            })?;

            if start_date.is_some_and(|start| date < start)
                || end_date.is_some_and(|end| date > end)
            {
                continue;
            }

            let market_state = match state_col.and_then(|idx| record.get(idx)) {
                Some(field) => field.parse::<MarketState>().map_err(|e| RangelabError::Data {
                    reason: format!("{}: {}", path.display(), e),
                })?,
                None => MarketState::Unknown,
            };

            bars.push(DailyBar {
                symbol: symbol.to_string(),
                date,
                open: parse_price(&record, open_col, "Open", &path)?,
                high: parse_price(&record, high_col, "High", &path)?,
                low: parse_price(&record, low_col, "Low", &path)?,
                close: parse_price(&record, close_col, "Close", &path)?,
                market_state,
            });
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }

    fn list_symbols(&self) -> Result<Vec<String>, RangelabError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| RangelabError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut symbols = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| RangelabError::Data {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if name_str.ends_with(DAILY_FILE_SUFFIX) {
                let symbol = &name_str[..name_str.len() - DAILY_FILE_SUFFIX.len()];
                symbols.push(symbol.to_string());
            }
        }

        symbols.sort();
        Ok(symbols)
    }

    fn get_data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, RangelabError> {
        let bars = self.fetch_daily(symbol, None, None)?;
        match (bars.first(), bars.last()) {
            (Some(first), Some(last)) => Ok(Some((first.date, last.date, bars.len()))),
            _ => Ok(None),
        }
    }
}
