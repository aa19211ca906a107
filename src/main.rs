// ABOUTME: Entry point for the depstat CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use depstat::config::Config;
use depstat::deployment::{DeploymentStatus, StatusRepository};
use depstat::error::Result;
use depstat::store::FileStore;
use serde::Serialize;
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct StatusReport<'a> {
    deployment_id: &'a str,
    status: DeploymentStatus,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Status {
            deployment_id,
            json,
        } => {
            let repo = open_repository(cli.config.as_deref())?;
            let status = repo.get_status(&deployment_id).await?;
            if json {
                let report = StatusReport {
                    deployment_id: &deployment_id,
                    status,
                };
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!("{status}");
            }
            Ok(())
        }
        Commands::Exists { deployment_id } => {
            let repo = open_repository(cli.config.as_deref())?;
            let exists = repo.exists(&deployment_id).await?;
            println!("{exists}");
            Ok(())
        }
        Commands::Parse { text, strict } => {
            let status = DeploymentStatus::parse(&text, !strict)?;
            println!("{status}");
            Ok(())
        }
        Commands::Statuses => {
            for status in DeploymentStatus::iter() {
                println!("{status}");
            }
            Ok(())
        }
    }
}

fn open_repository(config_path: Option<&Path>) -> Result<StatusRepository<FileStore>> {
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::discover(&env::current_dir()?)?,
    };
    config.repository()
}
