//! Sheet ingestion: header detection, normalization, persistence, re-aggregation

use serde::Serialize;
use sqlx::SqliteConnection;

use super::columns::ColumnResolver;
use super::error::{IngestError, RowPersistenceError};
use super::fields::LogicalField;
use super::header::locate_header_row;
use super::normalize::RowNormalizer;
use super::sheet::RawSheet;
use crate::config::repository::{regions, routes, source_files};
use crate::services::summary;

/// What happened to a single sheet row
#[derive(Debug)]
pub enum RowOutcome {
    Persisted { route_id: i64 },
    Skipped,
    Failed(RowPersistenceError),
}

/// Whether an ingestion finished cleanly or with some rejected rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestStatus {
    Succeeded,
    SucceededWithErrors,
}

/// Result of a completed ingestion
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub source_file_id: i64,
    pub region: String,
    pub sheet: String,
    /// 1-based row number of the detected header
    pub header_row: usize,
    pub records_processed: usize,
    pub errors: usize,
    pub skipped: usize,
    pub failures: Vec<RowPersistenceError>,
    pub summary_rows: usize,
}

impl IngestReport {
    pub fn status(&self) -> IngestStatus {
        if self.errors == 0 {
            IngestStatus::Succeeded
        } else {
            IngestStatus::SucceededWithErrors
        }
    }
}

/// Ingest `sheet` into `region_id`, recording it as `filename`
///
/// The header is located before anything is written, so `NoHeaderFound`
/// leaves the store untouched. Rows the store rejects are counted in the
/// report and do not stop the remaining rows. The capacity summary is rebuilt
/// afterwards regardless of how many rows succeeded.
pub async fn ingest(
    conn: &mut SqliteConnection,
    sheet: &RawSheet,
    region_id: i64,
    filename: &str,
) -> Result<IngestReport, IngestError> {
    let region = regions::find_region(conn, region_id)
        .await
        .map_err(IngestError::store)?
        .ok_or_else(|| IngestError::UnknownRegion {
            region: region_id.to_string(),
        })?;

    let header_idx = locate_header_row(&sheet.rows).ok_or(IngestError::NoHeaderFound)?;

    let source_file_id = source_files::create_source_file(conn, filename, region.id)
        .await
        .map_err(IngestError::store)?;

    let resolver = ColumnResolver::new(&sheet.rows[header_idx]);
    let normalizer = RowNormalizer::new(&resolver);

    log::info!(
        "Ingesting '{}' (sheet '{}') into {}: header at row {}",
        filename,
        sheet.name,
        region.name,
        header_idx + 1
    );
    let fallbacks = normalizer.fallback_fields();
    if !fallbacks.is_empty() {
        log::debug!(
            "Fields using legacy column positions: {}",
            fallbacks
                .iter()
                .map(|f| f.column())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let mut report = IngestReport {
        source_file_id,
        region: region.name.clone(),
        sheet: sheet.name.clone(),
        header_row: header_idx + 1,
        records_processed: 0,
        errors: 0,
        skipped: 0,
        failures: Vec::new(),
        summary_rows: 0,
    };

    for (idx, row) in sheet.rows.iter().enumerate().skip(header_idx + 1) {
        let row_number = idx + 1;
        match persist_row(conn, &normalizer, row, row_number, region.id, source_file_id).await {
            RowOutcome::Persisted { route_id } => {
                log::trace!("Row {} stored as route {}", row_number, route_id);
                report.records_processed += 1;
            }
            RowOutcome::Skipped => {
                log::debug!("Skipping row {}: first cell is blank", row_number);
                report.skipped += 1;
            }
            RowOutcome::Failed(failure) => {
                log::warn!("Error inserting {}", failure);
                report.errors += 1;
                report.failures.push(failure);
            }
        }
    }

    let summary_rows = summary::recompute(conn).await.map_err(IngestError::store)?;
    report.summary_rows = summary_rows.len();

    log::info!(
        "Imported {} network routes from '{}' ({} errors, {} skipped)",
        report.records_processed,
        filename,
        report.errors,
        report.skipped
    );

    Ok(report)
}

async fn persist_row(
    conn: &mut SqliteConnection,
    normalizer: &RowNormalizer,
    row: &[String],
    row_number: usize,
    region_id: i64,
    source_file_id: i64,
) -> RowOutcome {
    let Some(record) = normalizer.normalize(row) else {
        return RowOutcome::Skipped;
    };
    log::trace!(
        "Row {}: node '{}', capacity '{}'",
        row_number,
        record.get(LogicalField::Node),
        record.get(LogicalField::Capacity)
    );

    match routes::insert_route(conn, region_id, &record, source_file_id).await {
        Ok(route_id) => RowOutcome::Persisted { route_id },
        Err(e) => RowOutcome::Failed(RowPersistenceError {
            row: row_number,
            message: format!("{:#}", e),
        }),
    }
}
