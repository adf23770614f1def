//! # placa CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Pico y Placa predictor — license-plate circulation checker.
///
/// Tells you whether a vehicle may legally circulate on a given date and
/// time, based on the final digit of its license plate.
#[derive(Parser, Debug)]
#[command(name = "placa", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Check whether a plate may circulate on a date and time.
    Check(placa_cli::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => placa_cli::check::run(&args),
    }
}
