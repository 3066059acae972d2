#![allow(dead_code)]

use chrono::NaiveDate;
use rangelab::domain::error::RangelabError;
pub use rangelab::domain::bar::DailyBar;
use rangelab::domain::market_state::MarketState;
use rangelab::ports::data_port::DataPort;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<DailyBar>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, symbol: &str, bars: Vec<DailyBar>) -> Self {
        self.data.insert(symbol.to_string(), bars);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_daily(
        &self,
        symbol: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<DailyBar>, RangelabError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(RangelabError::Data {
                reason: reason.clone(),
            });
        }
        let bars = self.data.get(symbol).cloned().unwrap_or_default();
        Ok(bars
            .into_iter()
            .filter(|b| {
                !start_date.is_some_and(|s| b.date < s) && !end_date.is_some_and(|e| b.date > e)
            })
            .collect())
    }

    fn list_symbols(&self) -> Result<Vec<String>, RangelabError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }

    fn get_data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, RangelabError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(RangelabError::Data {
                reason: reason.clone(),
            });
        }
        match self.data.get(symbol) {
            Some(bars) if !bars.is_empty() => {
                let min = bars.iter().map(|b| b.date).min().unwrap();
                let max = bars.iter().map(|b| b.date).max().unwrap();
                Ok(Some((min, max, bars.len())))
            }
            _ => Ok(None),
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_bar(symbol: &str, date_str: &str, close: f64) -> DailyBar {
    DailyBar {
        symbol: symbol.to_string(),
        date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
        open: close - 0.001,
        high: close + 0.002,
        low: close - 0.002,
        close,
        market_state: MarketState::Unknown,
    }
}

pub fn make_bar_hl(symbol: &str, date_str: &str, high: f64, low: f64, close: f64) -> DailyBar {
    DailyBar {
        symbol: symbol.to_string(),
        date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
        open: low,
        high,
        low,
        close,
        market_state: MarketState::Unknown,
    }
}

/// Steadily drifting closes with a constant high-low span.
pub fn generate_bars(symbol: &str, start_date: &str, count: usize, start_close: f64) -> Vec<DailyBar> {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d").unwrap();
    (0..count)
        .map(|i| {
            let close = start_close + 0.001 * i as f64;
            DailyBar {
                symbol: symbol.to_string(),
                date: start + chrono::Duration::days(i as i64),
                open: close - 0.001,
                high: close + 0.002,
                low: close - 0.002,
                close,
                market_state: MarketState::Unknown,
            }
        })
        .collect()
}

/// Render bars as a raw daily CSV in the on-disk layout the loader expects.
pub fn bars_to_csv(bars: &[DailyBar]) -> String {
    let mut out = String::from("Symbol,Date,Open,High,Low,Close,MarketState\n");
    for bar in bars {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            bar.symbol,
            bar.date.format("%Y-%m-%d"),
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.market_state
        ));
    }
    out
}
