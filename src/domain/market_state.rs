//! Market regime placeholder label.
//!
//! Raw data may carry a pre-assigned label, and the loader passes it through
//! untouched. Nothing in this crate infers or assigns one: classification is
//! left to future work, and measurement stays observational.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarketState {
    #[default]
    Unknown,
    Trend,
    Range,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized market state: {0:?}")]
pub struct ParseMarketStateError(pub String);

impl fmt::Display for MarketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketState::Unknown => write!(f, "UNKNOWN"),
            MarketState::Trend => write!(f, "TREND"),
            MarketState::Range => write!(f, "RANGE"),
        }
    }
}

impl FromStr for MarketState {
    type Err = ParseMarketStateError;

    /// An empty field reads as `Unknown`; anything else must match a variant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "" | "UNKNOWN" => Ok(MarketState::Unknown),
            "TREND" => Ok(MarketState::Trend),
            "RANGE" => Ok(MarketState::Range),
            _ => Err(ParseMarketStateError(s.to_string())),
        }
    }
}
