//! TicTac CLI - Command-line interface
//!
//! Commands:
//! - move: Compute the engine's move for one position
//! - serve: Start the HTTP engine server
//! - match: Play engine-vs-engine games between difficulty tiers

mod match_cmd;
mod move_cmd;
mod server;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tictac_core::EngineConfig;

#[derive(Parser)]
#[command(name = "tictac")]
#[command(about = "Three-in-a-row move engine")]
struct Cli {
    /// Random seed for Easy/Medium play (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Engine configuration JSON file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a move for a position
    Move(move_cmd::MoveArgs),
    /// Start the engine server
    Serve(server::ServerArgs),
    /// Play a match between two difficulty tiers
    Match(match_cmd::MatchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let engine_config = load_engine_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Move(args) => move_cmd::run(args, engine_config, cli.seed),
        Commands::Serve(args) => server::run(args, engine_config, cli.seed),
        Commands::Match(args) => match_cmd::run(args, engine_config, cli.seed),
    }
}

/// Install the log subscriber; RUST_LOG overrides the default level
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Engine configuration from file, or defaults
fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => {
            let config = EngineConfig::load(path)?;
            tracing::info!("Loaded engine config from {}", path.display());
            Ok(config)
        }
        None => Ok(EngineConfig::default()),
    }
}
