mod cli;
mod commands;

use std::process::ExitCode;

use cli::{Cli, Commands, PartitionArgs};
use commands::{enrich, partition};
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber; `RUST_LOG` overrides the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        None => partition::run(&cli, &PartitionArgs::default()),
        Some(Commands::Partition(args)) => partition::run(&cli, args),
        Some(Commands::Enrich(args)) => enrich::run(&cli, args),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
