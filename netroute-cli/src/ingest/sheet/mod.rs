//! Raw sheet loading from workbook and CSV exports
//!
//! Workbooks (xlsx, xlsm, xls, ods) are read with calamine; the sheet whose
//! name contains the configured hint (default "summary1") is preferred,
//! otherwise the first sheet. CSV files are read as a single sheet.

mod reader;

pub use reader::{RawSheet, read_sheet};
