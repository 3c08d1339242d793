//! Name and type projections.

use std::collections::BTreeMap;

use crate::core::casing::Casing;
use crate::core::schema::Column;

/// Names of the columns, in column order.
pub fn column_names(columns: &[Column]) -> Vec<String> {
    columns.iter().map(|c| c.name.clone()).collect()
}

/// Map from normalized column name to native database type.
///
/// Keys come from `casing`. When two columns normalize to the same key the
/// later column wins.
pub fn column_db_types<C: Casing + ?Sized>(
    columns: &[Column],
    casing: &C,
) -> BTreeMap<String, String> {
    let mut types = BTreeMap::new();

    for c in columns {
        types.insert(casing.normalize(&c.name), c.db_type.clone());
    }

    types
}
