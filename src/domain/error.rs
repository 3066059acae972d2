//! Domain error types.

/// Top-level error type for rangelab.
#[derive(Debug, thiserror::Error)]
pub enum RangelabError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no data for {symbol}")]
    NoData { symbol: String },

    #[error("insufficient data for {symbol}: have {bars} bars, need {minimum}")]
    InsufficientData {
        symbol: String,
        bars: usize,
        minimum: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&RangelabError> for std::process::ExitCode {
    fn from(err: &RangelabError) -> Self {
        let code: u8 = match err {
            RangelabError::Io(_) => 1,
            RangelabError::ConfigParse { .. }
            | RangelabError::ConfigMissing { .. }
            | RangelabError::ConfigInvalid { .. } => 2,
            RangelabError::Data { .. } => 3,
            RangelabError::NoData { .. } | RangelabError::InsufficientData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
