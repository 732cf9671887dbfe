//! Command-line interface

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use commands::ingest::IngestCommands;
use commands::routes::{ListCommands, RoutesCommands};
use commands::summary::PivotCommands;

#[derive(Debug, Parser)]
#[command(
    name = "netroute",
    version,
    about = "Ingest regional network-route spreadsheets and report capacity by region"
)]
pub struct Cli {
    /// Path to the SQLite store (overrides config and NETROUTE_DATABASE)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import a route inventory spreadsheet for a region
    Ingest(IngestCommands),
    /// Rebuild the capacity summary from all stored routes
    Recompute,
    /// Show the capacity-by-region pivot
    Pivot(PivotCommands),
    /// List stored routes
    Routes(RoutesCommands),
    /// List regions
    Regions(ListCommands),
    /// List ingested source files
    Files(ListCommands),
}

pub async fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Ingest(args) => commands::ingest::handler::handle_ingest_command(args, config).await,
        Commands::Recompute => commands::summary::handler::handle_recompute_command(config).await,
        Commands::Pivot(args) => commands::summary::handler::handle_pivot_command(args, config).await,
        Commands::Routes(args) => commands::routes::handler::handle_routes_command(args, config).await,
        Commands::Regions(args) => commands::routes::handler::handle_regions_command(args, config).await,
        Commands::Files(args) => commands::routes::handler::handle_files_command(args, config).await,
    }
}
