//! Spreadsheet ingestion of regional route inventories
//!
//! This module turns loosely structured inventory sheets into normalized
//! route records: it finds the header row, maps variant column labels onto
//! the fixed logical schema, persists each data row, and rebuilds the
//! capacity summary.

pub mod columns;
pub mod error;
pub mod fields;
pub mod header;
pub mod normalize;
pub mod pipeline;
pub mod sheet;

pub use error::IngestError;
pub use fields::{LogicalField, RouteRecord};
pub use pipeline::{IngestReport, IngestStatus, ingest};
pub use sheet::read_sheet;
