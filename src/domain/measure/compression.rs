//! Range compression ratio.
//!
//! Pointwise ratio of a short rolling average range to a long one. A value
//! below 1 means the recent average range is narrower than the longer-horizon
//! average; this module only reports the number, it attaches no cutoff.

use crate::domain::measure::{MeasureKind, MeasurePoint, MeasureSeries};

pub fn calculate_compression(
    short_ma: &MeasureSeries,
    long_ma: &MeasureSeries,
    short: usize,
    long: usize,
) -> MeasureSeries {
    let kind = MeasureKind::Compression { short, long };
    let len = short_ma.points.len().min(long_ma.points.len());
    let mut points = Vec::with_capacity(len);

    for i in 0..len {
        let s = &short_ma.points[i];
        let l = &long_ma.points[i];

        let valid = s.valid && l.valid && l.value != 0.0;
        points.push(MeasurePoint {
            date: s.date,
            valid,
            value: if valid { s.value / l.value } else { 0.0 },
        });
    }

    MeasureSeries { kind, points }
}
