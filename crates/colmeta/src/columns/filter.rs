//! Order-preserving column filters.
//!
//! Each filter is one predicate plus a selector: `true` keeps the columns the
//! predicate matches, `false` keeps the rest. The two selections of the same
//! predicate partition the input exactly.

use crate::core::schema::Column;

/// Keep the columns for which `predicate` evaluates to `selector`.
pub fn filter_columns<P>(columns: &[Column], predicate: P, selector: bool) -> Vec<&Column>
where
    P: Fn(&Column) -> bool,
{
    columns.iter().filter(|c| predicate(*c) == selector).collect()
}

/// Columns whose value is (`auto = true`) or is not (`auto = false`)
/// produced by the database on write.
pub fn filter_by_auto(auto: bool, columns: &[Column]) -> Vec<&Column> {
    filter_columns(columns, Column::is_auto_generated, auto)
}

/// Columns that have (`defaults = true`) or lack (`defaults = false`) a
/// non-empty default expression.
pub fn filter_by_default(defaults: bool, columns: &[Column]) -> Vec<&Column> {
    filter_columns(columns, Column::has_default, defaults)
}

/// Columns backed by an enumerated native type.
pub fn filter_by_enum(columns: &[Column]) -> Vec<&Column> {
    filter_columns(columns, Column::is_enum, true)
}
