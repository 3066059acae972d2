//! Daily bar representation.

use crate::domain::market_state::MarketState;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct DailyBar {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Label carried through from raw data, never assigned by this crate.
    pub market_state: MarketState,
}

impl DailyBar {
    /// high - low
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// (high + low) / 2
    pub fn midpoint(&self) -> f64 {
        (self.high + self.low) / 2.0
    }
}
