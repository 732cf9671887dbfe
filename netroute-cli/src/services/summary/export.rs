//! Write the capacity pivot to an Excel workbook

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

use super::CapacitySummaryRow;
use crate::config::repository::regions::SEED_REGIONS;

const SHEET_NAME: &str = "Pivot";

/// Export summary rows with a trailing grand-total row
pub fn export_pivot(rows: &[CapacitySummaryRow], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();

    let mut headers: Vec<&str> = vec!["Capacity"];
    headers.extend(SEED_REGIONS.iter().map(|(name, _)| *name));
    headers.push("Grand Total");

    for (col, name) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &bold)?;
    }

    let mut totals = [0i64; 6];
    for (row_idx, row) in rows.iter().enumerate() {
        let line = (row_idx + 1) as u32;
        worksheet.write_string(line, 0, &row.capacity_type)?;

        let counts = row.region_counts();
        for (i, count) in counts.iter().chain(std::iter::once(&row.grand_total)).enumerate() {
            worksheet.write_number(line, (i + 1) as u16, *count as f64)?;
            totals[i] += count;
        }
    }

    let total_line = (rows.len() + 1) as u32;
    worksheet.write_string_with_format(total_line, 0, "Grand Total", &bold)?;
    for (i, total) in totals.iter().enumerate() {
        worksheet.write_number_with_format(total_line, (i + 1) as u16, *total as f64, &bold)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    log::info!("Exported {} pivot rows to {}", rows.len(), path.display());
    Ok(())
}
