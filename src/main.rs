use clap::Parser;
use rangelab::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
