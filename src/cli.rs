//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_data_adapter::CsvDataAdapter;
use crate::adapters::csv_output_adapter::CsvOutputAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config_validation::{
    build_analysis_config, validate_analysis_config, AnalysisConfig,
};
use crate::domain::error::RangelabError;
use crate::domain::measure::{
    COMPRESSION_PAIRS, EFFICIENCY_WINDOWS, OVERLAP_MA_WINDOWS, RANGE_WINDOWS,
};
use crate::domain::symbol_data::{compute_measures, SymbolData};
use crate::domain::universe::{parse_symbols, validate_universe};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::output_port::OutputPort;

#[derive(Parser, Debug)]
#[command(
    name = "rangelab",
    about = "Observer-only market regime measurement for daily FX data"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute measurement artifacts for each symbol
    Analyze {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        symbol: Option<String>,
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        #[arg(long)]
        dry_run: bool,
    },
    /// List symbols present in the data directory
    ListSymbols {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show data range for symbol(s)
    Info {
        #[arg(long)]
        symbol: Option<String>,
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Analyze {
            config,
            symbol,
            output_dir,
            dry_run,
        } => run_analyze(&config, symbol.as_deref(), output_dir.as_ref(), dry_run),
        Command::ListSymbols { config } => run_list_symbols(&config),
        Command::Info { symbol, config } => run_info(symbol.as_deref(), &config),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = RangelabError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// CLI override wins, then the configured list, then directory discovery.
pub fn resolve_symbols(
    symbol_override: Option<&str>,
    config: &dyn ConfigPort,
    data_port: &dyn DataPort,
) -> Result<Vec<String>, RangelabError> {
    if let Some(symbol) = symbol_override {
        return Ok(vec![symbol.trim().to_uppercase()]);
    }

    if let Some(list) = config
        .get_string("data", "symbols")
        .filter(|s| !s.trim().is_empty())
    {
        return parse_symbols(&list).map_err(|e| RangelabError::ConfigInvalid {
            section: "data".into(),
            key: "symbols".into(),
            reason: e.to_string(),
        });
    }

    data_port.list_symbols()
}

fn run_analyze(
    config_path: &PathBuf,
    symbol_override: Option<&str>,
    output_override: Option<&PathBuf>,
    dry_run: bool,
) -> ExitCode {
    // Stage 1: Load config
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    // Stage 2: Validate
    if let Err(e) = validate_analysis_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 3: Build AnalysisConfig, apply CLI overrides
    let mut cfg = match build_analysis_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    if let Some(dir) = output_override {
        cfg.output_dir = dir.clone();
    }

    // Stage 4: Resolve symbols
    let data_port = CsvDataAdapter::new(cfg.data_dir.clone());
    let symbols = match resolve_symbols(symbol_override, &adapter, &data_port) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    if symbols.is_empty() {
        eprintln!("error: no symbols found in {}", cfg.data_dir.display());
        return ExitCode::from(5);
    }

    if dry_run {
        return run_dry_run(&cfg, &symbols);
    }

    // Stages 5-7: Data port dependent pipeline
    run_analysis_pipeline(&data_port, &CsvOutputAdapter, &cfg, symbols)
}

pub fn run_analysis_pipeline(
    data_port: &dyn DataPort,
    output_port: &dyn OutputPort,
    cfg: &AnalysisConfig,
    symbols: Vec<String>,
) -> ExitCode {
    // Stage 5: Validate universe
    eprintln!("Validating {} symbols...", symbols.len());
    let validation = match validate_universe(data_port, symbols, cfg.start_date, cfg.end_date) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 6: Per-symbol fetch, measure, write
    let mut written = 0usize;
    for symbol in &validation.universe.symbols {
        let bars = match data_port.fetch_daily(symbol, cfg.start_date, cfg.end_date) {
            Ok(bars) => bars,
            Err(e) => {
                eprintln!("warning: skipping {} ({})", symbol, e);
                continue;
            }
        };

        let mut data = SymbolData::new(symbol.clone(), bars);
        data.measures = compute_measures(&data.bars);

        match output_port.write(&data, &cfg.output_dir) {
            Ok(path) => {
                // Universe validation guarantees non-empty bars here.
                let first = data.bars.first().map(|b| b.date.to_string());
                let last = data.bars.last().map(|b| b.date.to_string());
                eprintln!(
                    "  {}: {} bars, {} to {} -> {}",
                    symbol,
                    data.bar_count(),
                    first.unwrap_or_default(),
                    last.unwrap_or_default(),
                    path.display()
                );
                written += 1;
            }
            Err(e) => {
                eprintln!("error: failed to write artifact for {}: {}", symbol, e);
                return (&e).into();
            }
        }
    }

    // Stage 7: Summary
    if written == 0 {
        eprintln!("error: no artifacts written");
        return ExitCode::from(5);
    }

    eprintln!(
        "\nWrote {} artifact(s) to {}",
        written,
        cfg.output_dir.display()
    );
    ExitCode::SUCCESS
}

fn run_dry_run(cfg: &AnalysisConfig, symbols: &[String]) -> ExitCode {
    eprintln!("\nPlan:");
    eprintln!("  data dir:   {}", cfg.data_dir.display());
    eprintln!("  output dir: {}", cfg.output_dir.display());
    match (cfg.start_date, cfg.end_date) {
        (None, None) => eprintln!("  dates:      full extent"),
        (start, end) => eprintln!(
            "  dates:      {} to {}",
            start.map_or("open".to_string(), |d| d.to_string()),
            end.map_or("open".to_string(), |d| d.to_string())
        ),
    }
    eprintln!("  symbols:    {}", symbols.join(", "));

    eprintln!("\nMeasurements:");
    eprintln!("  range MAs:            {:?}", RANGE_WINDOWS);
    eprintln!("  compression pairs:    {:?}", COMPRESSION_PAIRS);
    eprintln!("  overlap ratio MAs:    {:?}", OVERLAP_MA_WINDOWS);
    eprintln!("  efficiency windows:   {:?}", EFFICIENCY_WINDOWS);

    eprintln!("\nDry run complete: configuration is valid");
    ExitCode::SUCCESS
}

fn run_list_symbols(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let cfg = match build_analysis_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let data_port = CsvDataAdapter::new(cfg.data_dir.clone());
    let symbols = match data_port.list_symbols() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if symbols.is_empty() {
        eprintln!("No symbols found in {}", cfg.data_dir.display());
    } else {
        for symbol in &symbols {
            println!("{}", symbol);
        }
        eprintln!("{} symbols found", symbols.len());
    }
    ExitCode::SUCCESS
}

fn run_info(symbol: Option<&str>, config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let cfg = match build_analysis_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let data_port = CsvDataAdapter::new(cfg.data_dir.clone());
    let symbols = match resolve_symbols(symbol, &adapter, &data_port) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    for s in &symbols {
        match data_port.get_data_range(s) {
            Ok(Some((min_date, max_date, count))) => {
                println!("{}: {} bars, {} to {}", s, count, min_date, max_date);
            }
            Ok(None) => {
                eprintln!("{}: no data found", s);
            }
            Err(e) => {
                eprintln!("error querying {}: {}", s, e);
            }
        }
    }
    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_analysis_config(&adapter) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let cfg = match build_analysis_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("  data dir:   {}", cfg.data_dir.display());
    eprintln!("  output dir: {}", cfg.output_dir.display());
    if let Some(list) = adapter.get_string("data", "symbols") {
        eprintln!("  symbols:    {}", list);
    }

    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}
