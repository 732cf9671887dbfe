//! Row normalization into fixed-order route records

use super::columns::{ColumnResolver, ColumnSource};
use super::fields::{FIELD_COUNT, LogicalField, RouteRecord};

/// Per-sheet column plan: where each logical field is read from
#[derive(Debug, Clone)]
pub struct RowNormalizer {
    plan: [ColumnSource; FIELD_COUNT],
}

impl RowNormalizer {
    /// Resolve every logical field once for the active sheet
    pub fn new(resolver: &ColumnResolver) -> Self {
        Self {
            plan: LogicalField::ALL.map(|field| resolver.resolve_field(field)),
        }
    }

    pub fn source(&self, field: LogicalField) -> ColumnSource {
        self.plan[field.legacy_index()]
    }

    /// Fields that had no matching header label
    pub fn fallback_fields(&self) -> Vec<LogicalField> {
        LogicalField::ALL
            .into_iter()
            .filter(|f| self.source(*f).is_fallback())
            .collect()
    }

    /// Normalize one raw row, or `None` if it is not a data row
    pub fn normalize(&self, row: &[String]) -> Option<RouteRecord> {
        if !is_data_row(row) {
            return None;
        }

        let mut record = RouteRecord::default();
        for field in LogicalField::ALL {
            let value = row
                .get(self.source(field).index())
                .map(|c| c.trim())
                .unwrap_or_default();
            record.set(field, value);
        }
        Some(record)
    }
}

/// A row counts as data only when its first cell is non-blank
pub fn is_data_row(row: &[String]) -> bool {
    row.first().is_some_and(|c| !c.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn normalizer(header: &[&str]) -> RowNormalizer {
        RowNormalizer::new(&ColumnResolver::new(&cells(header)))
    }

    #[test]
    fn test_labeled_columns_in_any_order() {
        let normalizer = normalizer(&["Capacity", "Hostname", "Node", "NE_IP", "IDU"]);
        let record = normalizer
            .normalize(&cells(&["10G", "rtr-01", "N1", "10.0.0.1", "IDU1"]))
            .unwrap();

        assert_eq!(record.get(LogicalField::Node), "N1");
        assert_eq!(record.get(LogicalField::NeIp), "10.0.0.1");
        assert_eq!(record.get(LogicalField::Idu), "IDU1");
        assert_eq!(record.get(LogicalField::Capacity), "10G");
        assert_eq!(record.get(LogicalField::Hostname), "rtr-01");
    }

    #[test]
    fn test_unlabeled_fields_use_legacy_positions() {
        // Only "Node" resolves, everything else reads its legacy column
        let normalizer = normalizer(&["Node", "a", "b", "c", "d"]);
        let record = normalizer
            .normalize(&cells(&["N1", "10.0.0.1", "IDU1", "1G", "Riverside"]))
            .unwrap();

        assert_eq!(record.get(LogicalField::NeIp), "10.0.0.1");
        assert_eq!(record.get(LogicalField::Capacity), "1G");
        assert_eq!(record.get(LogicalField::Location), "Riverside");
        assert_eq!(normalizer.fallback_fields().len(), 20);
    }

    #[test]
    fn test_short_row_yields_empty_strings() {
        let normalizer = normalizer(&["Node", "NE_IP", "IDU", "Capacity", "Location"]);
        let record = normalizer.normalize(&cells(&["N1", "10.0.0.1"])).unwrap();

        assert_eq!(record.get(LogicalField::Node), "N1");
        assert_eq!(record.get(LogicalField::Capacity), "");
        assert_eq!(record.get(LogicalField::Qam), "");
    }

    #[test]
    fn test_values_are_trimmed() {
        let normalizer = normalizer(&["Node", "Capacity"]);
        let record = normalizer.normalize(&cells(&["  N1 ", "\t1G\n"])).unwrap();

        assert_eq!(record.get(LogicalField::Node), "N1");
        assert_eq!(record.get(LogicalField::Capacity), "1G");
    }

    #[test]
    fn test_blank_first_cell_skips_row() {
        let normalizer = normalizer(&["Node", "Capacity"]);

        assert!(normalizer.normalize(&[]).is_none());
        assert!(normalizer.normalize(&cells(&["", "1G"])).is_none());
        assert!(normalizer.normalize(&cells(&["   ", "1G"])).is_none());
        assert!(normalizer.normalize(&cells(&["N1"])).is_some());
    }
}
