//! Directional efficiency over a rolling window.
//!
//! Net displacement is the absolute change from the window start to end.
//! Total movement is the sum of absolute day-to-day changes within the
//! window. Efficiency is net displacement over total movement: a straight
//! move scores 1, a round trip scores 0.
//! Warmup: first (n-1) bars are invalid; windows with zero total movement
//! are invalid.

use crate::domain::bar::DailyBar;
use crate::domain::measure::{MeasureKind, MeasurePoint, MeasureSeries};

pub fn calculate_efficiency(bars: &[DailyBar], window: usize) -> MeasureSeries {
    let kind = MeasureKind::Efficiency(window);
    let mut points = Vec::with_capacity(bars.len());

    for (i, bar) in bars.iter().enumerate() {
        // A window needs at least two bars to describe movement.
        let valid_index = window >= 2 && i + 1 >= window;
        if !valid_index {
            points.push(MeasurePoint {
                date: bar.date,
                valid: false,
                value: 0.0,
            });
            continue;
        }

        let start = i + 1 - window;
        let net_displacement = (bar.close - bars[start].close).abs();
        let total_movement: f64 = (start + 1..=i)
            .map(|j| (bars[j].close - bars[j - 1].close).abs())
            .sum();

        if total_movement == 0.0 {
            points.push(MeasurePoint {
                date: bar.date,
                valid: false,
                value: 0.0,
            });
            continue;
        }

        points.push(MeasurePoint {
            date: bar.date,
            valid: true,
            value: net_displacement / total_movement,
        });
    }

    MeasureSeries { kind, points }
}
