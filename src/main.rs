//! feedview - print per-user message feeds from plain text files.
//!
//! This is the main entry point for the feedview CLI tool.

use std::io::{self, BufWriter};

use clap::Parser;
use feedview::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::new(cli.log_level()))
        .init();

    match run(&cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {e:?}");
            std::process::ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = feedview::load_settings(cli)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    feedview::run(&settings, &mut out)?;
    Ok(())
}
