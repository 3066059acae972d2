//! rangelab — observe-first measurement of market-regime behaviour in daily FX data.
//!
//! Loads immutable per-symbol CSV files, computes rolling-window measurements
//! (range compression, range overlap, directional efficiency), and writes
//! regenerable derived artifacts. No signals, no thresholds, no labels.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
