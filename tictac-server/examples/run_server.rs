//! Example to run the engine server standalone
//!
//! Run with: cargo run -p tictac-server --example run_server

use tictac_server::{run_server, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tictac_server=debug".parse()?))
        .init();

    let config = ServerConfig {
        seed: Some(2024),
        ..ServerConfig::default()
    };

    println!("Starting TicTac engine server on port {}", config.port);
    println!("Try: curl -X POST localhost:{}/api/ai/move -H 'content-type: application/json' \\", config.port);
    println!("       -d '{{\"board\":[\"X\",\"X\",null,\"O\",\"O\",null,null,null,null],\"difficulty\":\"hard\",\"player\":\"X\"}}'");

    run_server(config).await
}
