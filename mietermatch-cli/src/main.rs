//! mietermatch CLI - backend for the MieterMatch rental platform
//!
//! - `serve`: run the HTTP API (landlords, tenants, verification mail)
//! - `status`: print store/mail configuration status

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "mietermatch",
    author,
    version,
    about = "Landlord/tenant record store and verification mail relay"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Show database file and mail provider status
    Status(commands::status::StatusArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env fallbacks; existing vars win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Status(args) => commands::run_status(args)?,
    }

    Ok(())
}
