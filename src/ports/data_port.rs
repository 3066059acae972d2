//! Data access port trait.
//!
//! Raw price data is immutable ground truth: implementations read it, never
//! write it.

use crate::domain::bar::DailyBar;
use crate::domain::error::RangelabError;
use chrono::NaiveDate;

pub trait DataPort {
    /// Fetch daily bars for a symbol, sorted ascending by date. `None` bounds
    /// mean the full extent of the stored series.
    fn fetch_daily(
        &self,
        symbol: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<DailyBar>, RangelabError>;

    fn list_symbols(&self) -> Result<Vec<String>, RangelabError>;

    fn get_data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, RangelabError>;
}
