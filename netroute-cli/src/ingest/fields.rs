//! Logical route fields and their header alias table
//!
//! The declaration order of [`LogicalField::ALL`] is the canonical legacy
//! column layout: a field's position in it is the column index used when a
//! sheet has no recognizable label for that field.

/// Number of logical fields in a normalized route
pub const FIELD_COUNT: usize = 21;

/// One normalized route attribute, independent of how a sheet labels it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    Node,
    NeIp,
    Idu,
    Capacity,
    Location,
    Parallel,
    MainStby,
    SiteIdA,
    LrdA,
    SiteIdB,
    LrdB,
    Uplink,
    LinkCount,
    Protection,
    RemoteIp,
    RemoteSlot,
    L3Port,
    Ras,
    Hostname,
    Link,
    Qam,
}

impl LogicalField {
    /// All fields in canonical legacy order
    pub const ALL: [LogicalField; FIELD_COUNT] = [
        LogicalField::Node,
        LogicalField::NeIp,
        LogicalField::Idu,
        LogicalField::Capacity,
        LogicalField::Location,
        LogicalField::Parallel,
        LogicalField::MainStby,
        LogicalField::SiteIdA,
        LogicalField::LrdA,
        LogicalField::SiteIdB,
        LogicalField::LrdB,
        LogicalField::Uplink,
        LogicalField::LinkCount,
        LogicalField::Protection,
        LogicalField::RemoteIp,
        LogicalField::RemoteSlot,
        LogicalField::L3Port,
        LogicalField::Ras,
        LogicalField::Hostname,
        LogicalField::Link,
        LogicalField::Qam,
    ];

    /// Column name in the `network_routes` table
    pub fn column(self) -> &'static str {
        self.aliases()[0]
    }

    /// Header spellings that resolve to this field, in priority order.
    /// The first alias is always the field's own column name.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            LogicalField::Node => &["node"],
            LogicalField::NeIp => &["ne_ip", "ne ip", "neip", "ne-ip"],
            LogicalField::Idu => &["idu"],
            LogicalField::Capacity => &["capacity"],
            LogicalField::Location => &["location"],
            LogicalField::Parallel => &["parallel"],
            LogicalField::MainStby => &["main_stby", "mainstby", "main stby", "main/stby"],
            LogicalField::SiteIdA => &["site_id_a", "siteid_a", "site id a", "siteid a"],
            LogicalField::LrdA => &["lrd_a", "lrd a"],
            LogicalField::SiteIdB => &["site_id_b", "siteid_b", "site id b", "siteid b"],
            LogicalField::LrdB => &["lrd_b", "lrd b"],
            LogicalField::Uplink => &["uplink"],
            LogicalField::LinkCount => &["link_count", "linkcount", "link count"],
            LogicalField::Protection => &["protection"],
            LogicalField::RemoteIp => &["remote_ip", "remoteip", "remote ip"],
            LogicalField::RemoteSlot => &["remote_slot", "remoteslot", "remote slot"],
            LogicalField::L3Port => &["l3_port", "l3port", "l3 port"],
            LogicalField::Ras => &["ras"],
            LogicalField::Hostname => &["hostname", "host name"],
            LogicalField::Link => &["link"],
            LogicalField::Qam => &["qam"],
        }
    }

    /// Column index of this field in the legacy unlabeled layout
    pub fn legacy_index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for LogicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// A normalized route: one trimmed string per logical field, empty when absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRecord {
    values: [String; FIELD_COUNT],
}

impl RouteRecord {
    pub fn get(&self, field: LogicalField) -> &str {
        &self.values[field.legacy_index()]
    }

    pub fn set(&mut self, field: LogicalField, value: impl Into<String>) {
        self.values[field.legacy_index()] = value.into();
    }

    /// Values in canonical field order
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_index_matches_declaration_order() {
        for (position, field) in LogicalField::ALL.iter().enumerate() {
            assert_eq!(field.legacy_index(), position);
        }
        assert_eq!(LogicalField::Capacity.legacy_index(), 3);
        assert_eq!(LogicalField::Qam.legacy_index(), 20);
    }

    #[test]
    fn test_aliases_are_lowercase_and_unique_per_field() {
        for field in LogicalField::ALL {
            let aliases = field.aliases();
            assert!(!aliases.is_empty());
            for alias in aliases {
                assert_eq!(*alias, alias.to_lowercase());
            }
            let mut sorted = aliases.to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), aliases.len(), "duplicate alias for {}", field);
        }
    }

    #[test]
    fn test_record_defaults_to_empty_strings() {
        let mut record = RouteRecord::default();
        assert!(record.values().iter().all(|v| v.is_empty()));

        record.set(LogicalField::Hostname, "rtr-01");
        assert_eq!(record.get(LogicalField::Hostname), "rtr-01");
        assert_eq!(record.values()[18], "rtr-01");
    }
}
