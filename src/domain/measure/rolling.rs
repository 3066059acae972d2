//! Rolling arithmetic mean over a measurement series.
//!
//! A point is valid only when a full window is in range and every input
//! point inside the window is valid, so warmup gaps in the input propagate
//! to the output instead of being averaged over.
//! Warmup: first (n-1) points are invalid.

use crate::domain::measure::{MeasureKind, MeasurePoint, MeasureSeries};

pub fn rolling_mean(input: &MeasureSeries, window: usize, kind: MeasureKind) -> MeasureSeries {
    if window == 0 || input.points.is_empty() {
        return MeasureSeries {
            kind,
            points: Vec::new(),
        };
    }

    let mut points = Vec::with_capacity(input.points.len());

    for i in 0..input.points.len() {
        let date = input.points[i].date;

        if i + 1 < window {
            points.push(MeasurePoint {
                date,
                valid: false,
                value: 0.0,
            });
            continue;
        }

        let slice = &input.points[i + 1 - window..=i];
        if slice.iter().any(|p| !p.valid) {
            points.push(MeasurePoint {
                date,
                valid: false,
                value: 0.0,
            });
            continue;
        }

        let mean = slice.iter().map(|p| p.value).sum::<f64>() / window as f64;
        points.push(MeasurePoint {
            date,
            valid: true,
            value: mean,
        });
    }

    MeasureSeries { kind, points }
}
