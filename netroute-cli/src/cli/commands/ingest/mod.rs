//! `netroute ingest`

pub mod handler;

use clap::Args;
use std::path::PathBuf;

use crate::cli::output::OutputFormat;

#[derive(Debug, Args)]
pub struct IngestCommands {
    /// Spreadsheet to import (.xlsx, .xlsm, .xls, .ods or .csv)
    pub file: Option<PathBuf>,

    /// Region name or id (defaults to the configured default_region)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}
