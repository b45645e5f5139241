use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod milestones;
mod store;

#[derive(Parser)]
#[command(name = "nocontact", version, about = "No-contact streak tracker CLI")]
struct Cli {
    /// Check-in data file (overrides config)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log today's check-in
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Streak statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Log { action } => commands::log::run(action, cli.file),
        Commands::Stats { action } => commands::stats::run(action, cli.file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
