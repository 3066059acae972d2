//! Derived-artifact output port trait.
//!
//! Artifacts are regenerable: a writer may overwrite a previous run's output
//! but must never touch the raw data directory.

use crate::domain::error::RangelabError;
use crate::domain::symbol_data::SymbolData;
use std::path::{Path, PathBuf};

pub trait OutputPort {
    /// Write one symbol's measurement table under `output_dir`, returning the
    /// path of the artifact.
    fn write(&self, data: &SymbolData, output_dir: &Path) -> Result<PathBuf, RangelabError>;
}
