//! `netroute routes`, `netroute regions` and `netroute files`

pub mod handler;

use clap::Args;

use crate::cli::output::OutputFormat;

#[derive(Debug, Args)]
pub struct RoutesCommands {
    /// Only routes of this region (by name)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Maximum number of routes (defaults to route_list_limit)
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct ListCommands {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}
