//! Ingestion error types

use serde::Serialize;
use std::path::PathBuf;

/// File-level and precondition failures; any of these aborts the request
#[derive(Debug)]
pub enum IngestError {
    /// A required input (file, region) was not supplied
    MissingInput { what: &'static str },
    /// The region id or name does not exist in the store
    UnknownRegion { region: String },
    /// The file could not be opened or parsed as a sheet
    UnreadableSheet { path: PathBuf, message: String },
    /// No row in the sheet looks like a header row
    NoHeaderFound,
    /// The store could not be reached or a file-level store operation failed
    StoreUnavailable { source: anyhow::Error },
}

impl IngestError {
    pub fn store(source: impl Into<anyhow::Error>) -> Self {
        IngestError::StoreUnavailable {
            source: source.into(),
        }
    }

    /// Stable machine-readable name of the failure
    pub fn kind(&self) -> &'static str {
        match self {
            IngestError::MissingInput { .. } => "missing_input",
            IngestError::UnknownRegion { .. } => "unknown_region",
            IngestError::UnreadableSheet { .. } => "unreadable_sheet",
            IngestError::NoHeaderFound => "no_header_found",
            IngestError::StoreUnavailable { .. } => "store_unavailable",
        }
    }
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::MissingInput { what } => write!(f, "missing required input: {}", what),
            IngestError::UnknownRegion { region } => write!(f, "unknown region '{}'", region),
            IngestError::UnreadableSheet { path, message } => {
                write!(f, "could not read sheet from {}: {}", path.display(), message)
            }
            IngestError::NoHeaderFound => {
                write!(f, "could not find a valid header row (expected Node, NE_IP, IDU or Capacity)")
            }
            IngestError::StoreUnavailable { source } => write!(f, "store unavailable: {:#}", source),
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestError::StoreUnavailable { source } => {
                let inner: &(dyn std::error::Error + 'static) = source.as_ref();
                Some(inner)
            }
            _ => None,
        }
    }
}

/// A single row the store refused; counted and reported, never fatal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowPersistenceError {
    /// 1-based row number in the source sheet
    pub row: usize,
    pub message: String,
}

impl std::fmt::Display for RowPersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}: {}", self.row, self.message)
    }
}

impl std::error::Error for RowPersistenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            IngestError::MissingInput { what: "region" }.to_string(),
            "missing required input: region"
        );
        assert_eq!(
            RowPersistenceError {
                row: 7,
                message: "constraint failed".to_string()
            }
            .to_string(),
            "row 7: constraint failed"
        );
    }

    #[test]
    fn test_store_error_exposes_source() {
        use std::error::Error;

        let err = IngestError::store(anyhow::anyhow!("database is locked"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("database is locked"));
        assert!(IngestError::NoHeaderFound.source().is_none());
    }

    #[test]
    fn test_kinds_are_distinct() {
        let kinds = [
            IngestError::MissingInput { what: "file" }.kind(),
            IngestError::UnknownRegion { region: "x".into() }.kind(),
            IngestError::UnreadableSheet { path: PathBuf::from("a.xlsx"), message: String::new() }.kind(),
            IngestError::NoHeaderFound.kind(),
            IngestError::store(anyhow::anyhow!("down")).kind(),
        ];
        let mut sorted = kinds.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), kinds.len());
        assert_eq!(IngestError::NoHeaderFound.kind(), "no_header_found");
    }
}
