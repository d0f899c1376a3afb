//! Server command - start the engine HTTP server
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to tictac-server crate)
//! - Level 4: configuration validation

use anyhow::Result;
use clap::Args;

use tictac_core::EngineConfig;
use tictac_server::{run_server, ServerConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8000")]
    pub port: u16,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
pub fn run(args: ServerArgs, engine_config: EngineConfig, seed: Option<u64>) -> Result<()> {
    let config = configure_server(&args, engine_config, seed)?;

    tracing::info!("Starting TicTac engine server on port {}", config.port);
    if let Some(seed) = config.seed {
        tracing::info!("Per-request seeds drawn from base seed {}", seed);
    }

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Build server configuration from command arguments
fn configure_server(
    args: &ServerArgs,
    engine_config: EngineConfig,
    seed: Option<u64>,
) -> Result<ServerConfig> {
    validate_port(args.port)?;
    engine_config.validate()?;

    Ok(ServerConfig {
        port: args.port,
        seed,
        engine: engine_config,
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server(config).await })
}

// ============================================================================
// LEVEL 4 - VALIDATION
// ============================================================================

fn validate_port(port: u16) -> Result<()> {
    if port == 0 {
        anyhow::bail!("Port 0 is not allowed; pick a fixed port for the engine server");
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
