//! Read a raw sheet (rows of string cells) from a spreadsheet or CSV file

use anyhow::{Context, Result};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// One worksheet as ordered rows of string cells
///
/// Row 0 is the sheet's first row; cell 0 is the first column of the used range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl RawSheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

/// Read the sheet to ingest from `path`
pub fn read_sheet(path: &Path, sheet_hint: &str) -> Result<RawSheet> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    if is_csv {
        read_csv(path)
    } else {
        read_workbook(path, sheet_hint)
    }
}

fn read_workbook(path: &Path, sheet_hint: &str) -> Result<RawSheet> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let sheet_names = workbook.sheet_names();
    let hint = sheet_hint.to_lowercase();
    let sheet_name = sheet_names
        .iter()
        .find(|name| !hint.is_empty() && name.to_lowercase().contains(&hint))
        .or_else(|| sheet_names.first())
        .context("Workbook has no sheets")?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    // Rows are padded back to row 1 so header positions stay absolute;
    // columns stay relative to the used range, so cell 0 is the table's
    // first column even when it starts past column A
    let start_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row];
    rows.extend(range.rows().map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>()));

    log::debug!(
        "Read {} rows from sheet '{}' of {}",
        rows.len(),
        sheet_name,
        path.display()
    );

    Ok(RawSheet::new(sheet_name, rows))
}

fn read_csv(path: &Path) -> Result<RawSheet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV record {}", idx + 1))?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("csv")
        .to_string();

    Ok(RawSheet::new(name, rows))
}

/// Coerce a workbook cell to its string form
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Whole numbers print without the trailing ".0"
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => format!("{}", dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
