//! Per-symbol bar storage and the full measurement set.

use crate::domain::bar::DailyBar;
use crate::domain::measure::compression::calculate_compression;
use crate::domain::measure::efficiency::calculate_efficiency;
use crate::domain::measure::overlap::calculate_overlap;
use crate::domain::measure::range::calculate_range;
use crate::domain::measure::rolling::rolling_mean;
use crate::domain::measure::{
    MeasureKind, MeasureSeries, COMPRESSION_PAIRS, EFFICIENCY_WINDOWS, OVERLAP_MA_WINDOWS,
    RANGE_WINDOWS,
};
use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct SymbolData {
    pub symbol: String,
    pub bars: Vec<DailyBar>,
    pub measures: HashMap<MeasureKind, MeasureSeries>,
    pub date_index: HashMap<NaiveDate, usize>,
}

impl SymbolData {
    pub fn new(symbol: String, bars: Vec<DailyBar>) -> Self {
        let date_index = bars
            .iter()
            .enumerate()
            .map(|(i, bar)| (bar.date, i))
            .collect();
        Self {
            symbol,
            bars,
            measures: HashMap::new(),
            date_index,
        }
    }

    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    pub fn get_bar(&self, date: NaiveDate) -> Option<&DailyBar> {
        self.date_index.get(&date).map(|&i| &self.bars[i])
    }
}

/// Run the canonical measurement set over a bar series.
///
/// Every series in the result has one point per bar. Measures depend only on
/// the bars (compression reuses the range averages but derives nothing from
/// any other measure).
pub fn compute_measures(bars: &[DailyBar]) -> HashMap<MeasureKind, MeasureSeries> {
    let mut measures = HashMap::new();

    let range = calculate_range(bars);
    for window in RANGE_WINDOWS {
        let kind = MeasureKind::RangeMa(window);
        measures.insert(kind, rolling_mean(&range, window, kind));
    }
    measures.insert(MeasureKind::Range, range);

    for (short, long) in COMPRESSION_PAIRS {
        let short_ma = &measures[&MeasureKind::RangeMa(short)];
        let long_ma = &measures[&MeasureKind::RangeMa(long)];
        let series = calculate_compression(short_ma, long_ma, short, long);
        measures.insert(series.kind, series);
    }

    let overlap = calculate_overlap(bars);
    for window in OVERLAP_MA_WINDOWS {
        let kind = MeasureKind::OverlapRatioMa(window);
        measures.insert(kind, rolling_mean(&overlap, window, kind));
    }
    measures.insert(MeasureKind::OverlapRatio, overlap);

    for window in EFFICIENCY_WINDOWS {
        let series = calculate_efficiency(bars, window);
        measures.insert(series.kind, series);
    }

    measures
}
