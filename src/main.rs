use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tally::config::Config;
use tally::ui;

/// A keypad-driven arithmetic calculator for the terminal.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
struct Args {
    /// Path to an alternative config file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config =
        Config::load(args.config.as_deref()).context("failed to load configuration")?;
    ui::run(&config)
}

/// Logs go to stderr so they cannot corrupt the raw-mode display.
fn init_tracing(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
