//! `netroute pivot` and `netroute recompute`

pub mod handler;

use clap::Args;
use std::path::PathBuf;

use crate::cli::output::OutputFormat;

#[derive(Debug, Args)]
pub struct PivotCommands {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Also write the pivot to this .xlsx file
    #[arg(long)]
    pub export: Option<PathBuf>,
}
