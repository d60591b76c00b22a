//! Local status command
//!
//! Prints the same report as `GET /api/system-status` without starting the
//! server, using the current environment.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use mietermatch_server::config::DEFAULT_DB_PATH;
use mietermatch_server::status::system_status;
use mietermatch_server::MailerConfig;

/// Arguments for the status command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// SQLite database file to check
    #[arg(long, env = "MIETERMATCH_DB", default_value = DEFAULT_DB_PATH)]
    pub database: PathBuf,
}

pub fn run_status(args: StatusArgs) -> Result<()> {
    let mailer = MailerConfig::from_env();
    let status = system_status(&args.database, mailer.is_active());

    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}
