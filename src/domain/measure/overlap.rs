//! Overlap ratio between consecutive daily ranges.
//!
//! Overlap length is the intersection of today's [low, high] with
//! yesterday's, clamped at zero. The ratio is overlap length divided by
//! today's range length.
//! Warmup: the first bar is invalid. Bars with no range (high == low) are
//! invalid rather than a division by zero.

use crate::domain::bar::DailyBar;
use crate::domain::measure::{MeasureKind, MeasurePoint, MeasureSeries};

pub fn calculate_overlap(bars: &[DailyBar]) -> MeasureSeries {
    let mut points = Vec::with_capacity(bars.len());

    for (i, bar) in bars.iter().enumerate() {
        if i == 0 {
            points.push(MeasurePoint {
                date: bar.date,
                valid: false,
                value: 0.0,
            });
            continue;
        }

        let prev = &bars[i - 1];
        let today_range = bar.range();

        if today_range <= 0.0 {
            points.push(MeasurePoint {
                date: bar.date,
                valid: false,
                value: 0.0,
            });
            continue;
        }

        let overlap_high = bar.high.min(prev.high);
        let overlap_low = bar.low.max(prev.low);
        let overlap_length = (overlap_high - overlap_low).max(0.0);

        points.push(MeasurePoint {
            date: bar.date,
            valid: true,
            value: overlap_length / today_range,
        });
    }

    MeasureSeries {
        kind: MeasureKind::OverlapRatio,
        points,
    }
}
