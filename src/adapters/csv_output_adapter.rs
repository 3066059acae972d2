//! CSV artifact writer for per-symbol measurement tables.
//!
//! Writes `<SYMBOL>_compression_analysis.csv` with one row per bar and one
//! column per measurement, in a fixed order. Warmup and otherwise-invalid
//! points serialize as empty fields. Artifacts are derived and regenerable;
//! rerunning the pipeline overwrites them.

use crate::domain::error::RangelabError;
use crate::domain::measure::MeasureKind;
use crate::domain::symbol_data::SymbolData;
use crate::ports::output_port::OutputPort;
use std::fs;
use std::path::{Path, PathBuf};

pub const OUTPUT_FILE_SUFFIX: &str = "_compression_analysis.csv";

/// Measurement columns in artifact order, after the leading Symbol and Date.
pub fn measure_columns() -> [MeasureKind; 12] {
    [
        MeasureKind::Range,
        MeasureKind::RangeMa(5),
        MeasureKind::RangeMa(10),
        MeasureKind::RangeMa(20),
        MeasureKind::Compression { short: 5, long: 20 },
        MeasureKind::Compression { short: 10, long: 20 },
        MeasureKind::OverlapRatio,
        MeasureKind::OverlapRatioMa(5),
        MeasureKind::OverlapRatioMa(10),
        MeasureKind::Efficiency(5),
        MeasureKind::Efficiency(10),
        MeasureKind::Efficiency(20),
    ]
}

pub struct CsvOutputAdapter;

impl OutputPort for CsvOutputAdapter {
    fn write(&self, data: &SymbolData, output_dir: &Path) -> Result<PathBuf, RangelabError> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(format!("{}{}", data.symbol, OUTPUT_FILE_SUFFIX));

        let mut writer = csv::Writer::from_path(&path).map_err(|e| RangelabError::Data {
            reason: format!("failed to create {}: {}", path.display(), e),
        })?;

        let columns = measure_columns();

        let mut header = vec!["Symbol".to_string(), "Date".to_string()];
        header.extend(columns.iter().map(|kind| kind.to_string()));
        writer
            .write_record(&header)
            .map_err(|e| write_error(&path, e))?;

        for i in 0..data.bars.len() {
            let bar = &data.bars[i];
            let mut record = Vec::with_capacity(header.len());
            record.push(data.symbol.clone());
            record.push(bar.date.format("%Y-%m-%d").to_string());

            for kind in &columns {
                let value = data
                    .measures
                    .get(kind)
                    .and_then(|series| series.value_at(i));
                record.push(match value {
                    Some(v) => v.to_string(),
                    None => String::new(),
                });
            }

            writer
                .write_record(&record)
                .map_err(|e| write_error(&path, e))?;
        }

        writer.flush()?;
        Ok(path)
    }
}

fn write_error(path: &Path, e: csv::Error) -> RangelabError {
    RangelabError::Data {
        reason: format!("failed to write {}: {}", path.display(), e),
    }
}
