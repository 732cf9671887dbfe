// Capacity summary service
//
// Rebuilds the capacity-type x region pivot from the full route table and
// exports it. The stored summary is a pure materialized view of
// network_routes: it is always rebuilt from scratch, never patched.

pub mod export;

pub use crate::config::repository::summary::CapacitySummaryRow;
pub use export::export_pivot;

use anyhow::{Context, Result};
use sqlx::{Connection, SqliteConnection};

use crate::config::repository::summary;

/// Replace the stored summary with a fresh aggregation of all routes
///
/// Delete and re-insert happen in one transaction, so readers never observe a
/// half-built summary.
pub async fn recompute(conn: &mut SqliteConnection) -> Result<Vec<CapacitySummaryRow>> {
    let mut tx = conn
        .begin()
        .await
        .context("Failed to start summary transaction")?;

    summary::delete_all_summary_rows(&mut tx).await?;

    let rows = summary::query_capacity_counts_by_region(&mut tx).await?;
    for row in &rows {
        summary::insert_summary_row(&mut tx, row).await?;
    }

    tx.commit()
        .await
        .context("Failed to commit capacity summary")?;

    log::info!("Capacity summary rebuilt with {} capacity types", rows.len());
    Ok(rows)
}
