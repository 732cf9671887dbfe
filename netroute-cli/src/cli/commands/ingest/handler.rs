//! Ingest command handler

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;

use super::IngestCommands;
use crate::cli::output::{OutputFormat, print_json};
use crate::config::Config;
use crate::config::repository::{self, regions};
use crate::ingest::{IngestError, IngestReport, IngestStatus, ingest, read_sheet};

/// JSON shape of a completed ingestion
#[derive(Serialize)]
struct ReportOutput<'a> {
    status: IngestStatus,
    #[serde(flatten)]
    report: &'a IngestReport,
}

/// JSON shape of an ingestion that did not complete
#[derive(Debug, Serialize)]
struct FailureOutput {
    status: &'static str,
    kind: Option<&'static str>,
    error: String,
}

impl FailureOutput {
    fn from_error(err: &anyhow::Error) -> Self {
        Self {
            status: "failed",
            kind: err.downcast_ref::<IngestError>().map(IngestError::kind),
            error: format!("{:#}", err),
        }
    }
}

/// Handle `netroute ingest`
pub async fn handle_ingest_command(args: IngestCommands, config: &Config) -> Result<()> {
    let format = args.format;

    let report = match run_ingest(args, config).await {
        Ok(report) => report,
        Err(e) => {
            if format == OutputFormat::Json {
                print_json(&FailureOutput::from_error(&e))?;
            }
            return Err(e);
        }
    };

    match format {
        OutputFormat::Json => print_json(&ReportOutput {
            status: report.status(),
            report: &report,
        })
        .context("Failed to print ingest report")?,
        OutputFormat::Table => print_report(&report),
    }

    Ok(())
}

async fn run_ingest(args: IngestCommands, config: &Config) -> Result<IngestReport> {
    // Presence checks come first so a bad invocation touches nothing
    let file = args.file.ok_or(IngestError::MissingInput { what: "file" })?;
    let region_ref = args
        .region
        .or_else(|| config.default_region.clone())
        .ok_or(IngestError::MissingInput { what: "region" })?;

    let pool = repository::open_store(&config.database_path).await?;
    let mut conn = repository::acquire(&pool).await?;

    let region = regions::find_region_by_ref(&mut conn, &region_ref)
        .await
        .map_err(IngestError::store)?
        .ok_or_else(|| IngestError::UnknownRegion {
            region: region_ref.clone(),
        })?;

    let sheet = read_sheet(&file, &config.sheet_hint).map_err(|e| IngestError::UnreadableSheet {
        path: file.clone(),
        message: format!("{:#}", e),
    })?;

    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let report = ingest(&mut conn, &sheet, region.id, &filename).await?;

    drop(conn);
    pool.close().await;

    Ok(report)
}

fn print_report(report: &IngestReport) {
    match report.status() {
        IngestStatus::Succeeded => println!(
            "{} Imported {} network routes into {}",
            "✓".green().bold(),
            report.records_processed.to_string().bold(),
            report.region.cyan()
        ),
        IngestStatus::SucceededWithErrors => println!(
            "{} Import succeeded with {} errors: {} network routes into {}",
            "!".yellow().bold(),
            report.errors.to_string().red().bold(),
            report.records_processed.to_string().bold(),
            report.region.cyan()
        ),
    }

    println!(
        "  sheet '{}', header at row {}, {} blank rows skipped, {} capacity types in summary",
        report.sheet, report.header_row, report.skipped, report.summary_rows
    );

    for failure in &report.failures {
        println!("  {} {}", "✗".red(), failure);
    }
}
