//! Command-line interface for the trials dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod list;

#[derive(Parser, Debug)]
#[command(
    name = "trials-dashboard",
    version,
    about = "Search, filter, sort, and page through clinical trial records"
)]
pub struct Cli {
    /// Output JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the dashboard API over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(long, default_value_t = 3000)]
        port: u16,

        /// Dataset JSON file (default: $TRIALS_DASHBOARD_DATA, then the bundled dataset)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// List trials with the same filters the API accepts
    List(list::ListArgs),

    /// Show known trial status codes and labels
    Statuses,

    /// Show version
    Version,
}

/// Runs a non-server command and returns its rendered output.
///
/// # Errors
///
/// Returns an error for invalid arguments, unreadable datasets, or rendering failures.
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    let json = cli.json;
    match cli.command {
        Commands::List(args) => Ok(list::run(args, json)?),
        Commands::Statuses => {
            let statuses = crate::entities::status::statuses();
            if json {
                Ok(crate::render::json::to_pretty(&statuses)?)
            } else {
                Ok(crate::render::markdown::statuses_markdown(&statuses)?)
            }
        }
        Commands::Version => Ok(format!("trials-dashboard {}", env!("CARGO_PKG_VERSION"))),
        Commands::Serve { .. } => Err(anyhow::anyhow!(
            "serve runs the HTTP server and has no text output"
        )),
    }
}
