//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::core::casing::CasingStyle;
use crate::core::schema::Table;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Casing used for type-map keys (default: title).
    #[serde(default)]
    pub casing: CasingStyle,

    /// Which tables of a schema document to process.
    #[serde(default)]
    pub tables: TableSelection,
}

/// Include/exclude rules for tables.
///
/// Entries match either the bare table name or `schema.name`. An empty
/// include list means every table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSelection {
    /// Tables to process.
    #[serde(default)]
    pub include: Vec<String>,

    /// Tables to skip, applied after `include`.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl TableSelection {
    /// Whether the table passes the include and exclude rules.
    pub fn matches(&self, table: &Table) -> bool {
        let full_name = table.full_name();
        let hit = |entry: &String| *entry == table.name || *entry == full_name;

        (self.include.is_empty() || self.include.iter().any(hit))
            && !self.exclude.iter().any(hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_table(schema: &str, name: &str) -> Table {
        Table::new(schema, name, vec![])
    }

    #[test]
    fn test_empty_selection_matches_everything() {
        let selection = TableSelection::default();
        assert!(selection.matches(&make_test_table("public", "users")));
        assert!(selection.matches(&make_test_table("", "orders")));
    }

    #[test]
    fn test_include_by_name_or_full_name() {
        let selection = TableSelection {
            include: vec!["users".to_string(), "audit.events".to_string()],
            exclude: vec![],
        };
        assert!(selection.matches(&make_test_table("public", "users")));
        assert!(selection.matches(&make_test_table("audit", "events")));
        assert!(!selection.matches(&make_test_table("public", "events")));
    }

    #[test]
    fn test_exclude_wins() {
        let selection = TableSelection {
            include: vec![],
            exclude: vec!["public.schema_migrations".to_string()],
        };
        assert!(!selection.matches(&make_test_table("public", "schema_migrations")));
        assert!(selection.matches(&make_test_table("public", "users")));
    }
}
