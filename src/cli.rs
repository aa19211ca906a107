// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "depstat")]
#[command(about = "Inspect deployment status records in a key-value store")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: discover depstat.yml in the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current status of a deployment
    Status {
        /// Deployment identifier
        deployment_id: String,

        /// Print a JSON object instead of the bare status
        #[arg(long)]
        json: bool,
    },

    /// Check whether a deployment exists
    Exists {
        /// Deployment identifier
        deployment_id: String,
    },

    /// Parse a status string and print its canonical form
    Parse {
        /// Status text
        text: String,

        /// Require the exact canonical (uppercase) spelling
        #[arg(long)]
        strict: bool,
    },

    /// List every known status in lifecycle order
    Statuses,
}
