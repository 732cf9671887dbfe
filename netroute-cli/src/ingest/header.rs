//! Header row detection for unstructured sheets
//!
//! Inventory exports often carry title rows, notes, or blank rows above the
//! real column headers. A row is taken as the header when its first non-empty
//! cell names one of the identifying route columns.

/// Keywords matched as substrings of the first non-empty cell
const HEADER_KEYWORDS: &[&str] = &["node", "ne_ip", "ne ip", "idu", "capacity"];

/// Keywords that must equal the whole cell ("ne" alone is too common a substring)
const HEADER_EXACT: &[&str] = &["ne"];

/// Index of the first row that looks like a header, or `None`
pub fn locate_header_row(rows: &[Vec<String>]) -> Option<usize> {
    rows.iter().position(|row| is_header_row(row))
}

pub fn is_header_row(row: &[String]) -> bool {
    let Some(first) = first_non_empty(row) else {
        return false;
    };

    let folded = first.to_lowercase();
    HEADER_KEYWORDS.iter().any(|k| folded.contains(k)) || HEADER_EXACT.contains(&folded.as_str())
}

fn first_non_empty(row: &[String]) -> Option<&str> {
    row.iter().map(|c| c.trim()).find(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_header_at_first_row() {
        let rows = sheet(&[&["Node", "NE_IP", "IDU", "Capacity"], &["N1", "10.0.0.1", "IDU1", "1G"]]);
        assert_eq!(locate_header_row(&rows), Some(0));
    }

    #[test]
    fn test_skips_title_and_blank_rows() {
        let rows = sheet(&[
            &["Network Inventory - Central"],
            &[],
            &["", ""],
            &["Exported 2024-03-01"],
            &["NODE", "NE IP", "IDU"],
            &["N1", "10.0.0.1", "IDU1"],
        ]);
        assert_eq!(locate_header_row(&rows), Some(4));
    }

    #[test]
    fn test_uses_first_non_empty_cell() {
        let rows = sheet(&[&["", "  ", "IDU", "Node"], &["", "", "IDU1", "N1"]]);
        assert_eq!(locate_header_row(&rows), Some(0));
    }

    #[test]
    fn test_only_first_non_empty_cell_is_inspected() {
        let rows = sheet(&[&["Summary", "Node", "IDU"]]);
        assert_eq!(locate_header_row(&rows), None);
    }

    #[test]
    fn test_ne_matches_whole_cell_only() {
        assert!(is_header_row(&["NE".to_string()]));
        assert!(is_header_row(&[" ne ".to_string(), "IP".to_string()]));
        assert!(!is_header_row(&["Network".to_string()]));
        assert!(!is_header_row(&["Northeast".to_string()]));
    }

    #[test]
    fn test_not_found() {
        assert_eq!(locate_header_row(&[]), None);

        let rows = sheet(&[&["Region", "Total"], &["Central", "12"]]);
        assert_eq!(locate_header_row(&rows), None);
    }
}
