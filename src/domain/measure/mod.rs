//! Rolling-window measurements over daily bars.
//!
//! This module provides types for representing measurement values and series:
//! - `MeasurePoint`: a single point in a measurement time series
//! - `MeasureKind`: enum for measurement identity + parameters (serves as HashMap key)
//! - `MeasureSeries`: a time series of measurement values
//!
//! Every measurement is a pure function of the bars. None of them emits a
//! regime label or a signal; they only describe behaviour.

pub mod range;
pub mod rolling;
pub mod compression;
pub mod overlap;
pub mod efficiency;

use chrono::NaiveDate;
use std::fmt;

/// Windows for the rolling average of the daily range.
pub const RANGE_WINDOWS: [usize; 3] = [5, 10, 20];

/// Windows for the rolling average of the overlap ratio.
pub const OVERLAP_MA_WINDOWS: [usize; 2] = [5, 10];

/// Windows for directional efficiency.
pub const EFFICIENCY_WINDOWS: [usize; 3] = [5, 10, 20];

/// (short, long) window pairs for the range compression ratio.
pub const COMPRESSION_PAIRS: [(usize, usize); 2] = [(5, 20), (10, 20)];

#[derive(Debug, Clone)]
pub struct MeasurePoint {
    pub date: NaiveDate,
    pub valid: bool,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureKind {
    Range,
    RangeMa(usize),
    Compression { short: usize, long: usize },
    OverlapRatio,
    OverlapRatioMa(usize),
    Efficiency(usize),
}

#[derive(Debug, Clone)]
pub struct MeasureSeries {
    pub kind: MeasureKind,
    pub points: Vec<MeasurePoint>,
}

impl MeasureSeries {
    /// Value at index `i`, or `None` if out of range or still in warmup.
    pub fn value_at(&self, i: usize) -> Option<f64> {
        self.points.get(i).filter(|p| p.valid).map(|p| p.value)
    }
}

impl fmt::Display for MeasureKind {
    /// Column names as they appear in output artifacts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureKind::Range => write!(f, "Range"),
            MeasureKind::RangeMa(window) => write!(f, "Range_MA_{}", window),
            MeasureKind::Compression { short, long } => {
                write!(f, "RangeCompression_{}_vs_{}", short, long)
            }
            MeasureKind::OverlapRatio => write!(f, "Overlap_Ratio"),
            MeasureKind::OverlapRatioMa(window) => write!(f, "Overlap_Ratio_MA_{}", window),
            MeasureKind::Efficiency(window) => write!(f, "DirectionalEfficiency_{}", window),
        }
    }
}
