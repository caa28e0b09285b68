//! Shortrate CLI - Short-rate path simulation from the command line
//!
//! # Commands
//!
//! - `shortrate simulate` - Simulate both models and write one chart per model
//! - `shortrate check` - Validate configuration and print the resolved run
//!
//! # Architecture
//!
//! As the service layer, this crate resolves configuration (defaults, TOML
//! file, environment, flags), installs the tracing subscriber and hands a
//! validated parameter set to `shortrate_report::Pipeline`.

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::RunArgs;
use config::CliConfig;

/// Short-rate path simulation CLI
#[derive(Parser)]
#[command(name = "shortrate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug level unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "shortrate.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate the plain and harmonic models and render their mean paths
    Simulate(RunArgs),

    /// Check configuration without simulating
    Check(RunArgs),
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let args = match &cli.command {
        Commands::Simulate(args) | Commands::Check(args) => args,
    };
    let config = args.apply(CliConfig::from_file(&cli.config)?.with_env_override()?);
    config.validate()?;

    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.to_lowercase()
    };
    init_tracing(&log_level);
    debug!(config = %cli.config, "Configuration resolved");

    match cli.command {
        Commands::Simulate(_) => commands::simulate::run(&config)?,
        Commands::Check(_) => commands::check::run(&config)?,
    }

    Ok(())
}
