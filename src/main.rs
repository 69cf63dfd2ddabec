//! CLI entry point for the wave function collapse layout generator

use clap::Parser;
use tilewave::io::cli::{Cli, FileProcessor};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> tilewave::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
