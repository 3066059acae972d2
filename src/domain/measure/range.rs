//! Daily range series.
//!
//! Range = high - low. Valid from the first bar; there is no warmup.

use crate::domain::bar::DailyBar;
use crate::domain::measure::{MeasureKind, MeasurePoint, MeasureSeries};

pub fn calculate_range(bars: &[DailyBar]) -> MeasureSeries {
    let points = bars
        .iter()
        .map(|bar| MeasurePoint {
            date: bar.date,
            valid: true,
            value: bar.range(),
        })
        .collect();

    MeasureSeries {
        kind: MeasureKind::Range,
        points,
    }
}
