//! Header label resolution for logical fields
//!
//! Source spreadsheets label the same column in many ways ("NE_IP", "NE IP",
//! "Ne Ip (mgmt)"). Resolution is a case-insensitive substring test and the
//! first matching column wins, so a short alias such as "link" also matches
//! an earlier "Uplink" column.

use super::fields::LogicalField;

/// Where a logical field's value is read from in a data row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// Matched a header label at this column
    Header(usize),
    /// No label matched; uses the field's legacy position
    Fallback(usize),
}

impl ColumnSource {
    pub fn index(self) -> usize {
        match self {
            ColumnSource::Header(i) | ColumnSource::Fallback(i) => i,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, ColumnSource::Fallback(_))
    }
}

/// Case-folded header labels of one sheet, in column order
#[derive(Debug, Clone)]
pub struct ColumnResolver {
    labels: Vec<(usize, String)>,
}

impl ColumnResolver {
    pub fn new(header_row: &[String]) -> Self {
        let labels = header_row
            .iter()
            .enumerate()
            .map(|(i, label)| (i, label.trim().to_lowercase()))
            .filter(|(_, label)| !label.is_empty())
            .collect();

        Self { labels }
    }

    /// First column whose label contains `name`
    pub fn resolve(&self, name: &str) -> Option<usize> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.labels
            .iter()
            .find(|(_, label)| label.contains(&needle))
            .map(|(i, _)| *i)
    }

    /// Try each alias in order, returning the first that resolves
    pub fn resolve_aliases(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|alias| self.resolve(alias))
    }

    /// Resolve a logical field, falling back to its legacy position
    pub fn resolve_field(&self, field: LogicalField) -> ColumnSource {
        match self.resolve_aliases(field.aliases()) {
            Some(i) => ColumnSource::Header(i),
            None => ColumnSource::Fallback(field.legacy_index()),
        }
    }
}
