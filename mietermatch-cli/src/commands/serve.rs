//! HTTP server command
//!
//! Opens the SQLite store, wires the Brevo dispatcher and serves the API.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mietermatch_server::config::{DEFAULT_DB_PATH, DEFAULT_MAX_CONNECTIONS};
use mietermatch_server::{run_server, AppState, MailerConfig, ServerConfig, StoreConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "MIETERMATCH_BIND", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// SQLite database file (created if missing)
    #[arg(long, env = "MIETERMATCH_DB", default_value = DEFAULT_DB_PATH)]
    pub database: PathBuf,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store = StoreConfig {
        max_connections: args.max_connections,
        ..StoreConfig::with_path(args.database)
    };
    let mailer = MailerConfig::from_env();

    tracing::info!("Starting mietermatch server on {}", args.bind);

    let state = AppState::open(&store, &mailer)
        .await
        .with_context(|| format!("Failed to open database {}", store.path.display()))?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Blocks until shutdown
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
