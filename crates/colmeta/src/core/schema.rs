//! Column and table metadata types.
//!
//! These types describe introspected tables in the form code generators
//! consume. They are produced once per generation run and read-only after
//! that.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::columns::{
    column_db_types, column_names, filter_by_auto, filter_by_default, filter_by_enum,
};
use crate::error::{MetaError, Result};

use super::casing::Casing;

/// Keyword a native type starts with when it denotes an enumerated type.
pub const ENUM_PREFIX: &str = "enum";

/// Dialect-specific column attributes.
///
/// Only the dialect that reports an attribute carries it, so a column read
/// from MySQL can never hold a Postgres array element type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DialectExt {
    /// No dialect-specific attributes.
    #[default]
    Generic,

    /// PostgreSQL catalog details.
    Postgres {
        /// Element type of an ARRAY column (`information_schema.element_types`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        arr_type: Option<String>,

        /// User-defined type name (`udt_name`), e.g. `_int4` or `citext`.
        #[serde(default)]
        udt_name: String,
    },

    /// MySQL catalog details.
    Mysql {
        /// Size-qualified type, e.g. `tinyint(1)` where `db_type` is `tinyint`.
        full_db_type: String,
    },

    /// SQL Server catalog details.
    Mssql {
        /// The engine produces the value on write (identity, rowversion).
        #[serde(default)]
        auto_generated: bool,
    },
}

/// Column metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,

    /// Target-language type name (e.g. "i64", "Option<String>").
    #[serde(default)]
    pub r#type: String,

    /// Native database type (e.g. "integer", "enum.mood('sad','ok')").
    pub db_type: String,

    /// Default value expression, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Whether the column allows NULL.
    #[serde(default)]
    pub nullable: bool,

    /// Whether the column carries a unique constraint.
    #[serde(default)]
    pub unique: bool,

    /// Whether the column's values are validated by generated code.
    #[serde(default)]
    pub validated: bool,

    /// Dialect-specific attributes.
    #[serde(default)]
    pub dialect: DialectExt,
}

impl Column {
    /// Create a column with the given name and native type. Everything else
    /// starts out empty, false or generic.
    pub fn new(name: impl Into<String>, db_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            r#type: String::new(),
            db_type: db_type.into(),
            default: None,
            nullable: false,
            unique: false,
            validated: false,
            dialect: DialectExt::Generic,
        }
    }

    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.r#type = ty.into();
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn with_validated(mut self, validated: bool) -> Self {
        self.validated = validated;
        self
    }

    pub fn with_dialect(mut self, dialect: DialectExt) -> Self {
        self.dialect = dialect;
        self
    }

    /// Whether the database produces this column's value itself on write.
    ///
    /// Only SQL Server reports this; columns from other dialects are always
    /// application supplied.
    pub fn is_auto_generated(&self) -> bool {
        matches!(
            self.dialect,
            DialectExt::Mssql {
                auto_generated: true
            }
        )
    }

    /// Whether the column has a non-empty default expression.
    pub fn has_default(&self) -> bool {
        self.default.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Whether the native type denotes an enumerated type.
    ///
    /// Case-sensitive: `enum('a')` matches, `ENUM('a')` does not.
    pub fn is_enum(&self) -> bool {
        self.db_type.starts_with(ENUM_PREFIX)
    }

    /// Whether the native type denotes an array.
    pub fn is_array(&self) -> bool {
        self.db_type.eq_ignore_ascii_case("array") || self.db_type.ends_with("[]")
    }

    /// Element type of a Postgres array column.
    pub fn arr_type(&self) -> Option<&str> {
        match &self.dialect {
            DialectExt::Postgres { arr_type, .. } => arr_type.as_deref(),
            _ => None,
        }
    }

    /// Postgres user-defined type name.
    pub fn udt_name(&self) -> Option<&str> {
        match &self.dialect {
            DialectExt::Postgres { udt_name, .. } if !udt_name.is_empty() => {
                Some(udt_name.as_str())
            }
            _ => None,
        }
    }

    /// Size-qualified native type, falling back to `db_type` for dialects
    /// that do not report one.
    pub fn full_db_type(&self) -> &str {
        match &self.dialect {
            DialectExt::Mysql { full_db_type } if !full_db_type.is_empty() => {
                full_db_type.as_str()
            }
            _ => self.db_type.as_str(),
        }
    }
}

/// Table metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Schema name (may be empty for engines without schemas).
    #[serde(default)]
    pub schema: String,

    /// Table name.
    pub name: String,

    /// Column definitions in ordinal order.
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(schema: impl Into<String>, name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            columns,
        }
    }

    /// Get the fully qualified table name.
    pub fn full_name(&self) -> String {
        if self.schema.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.schema, self.name)
        }
    }

    /// Find a column by exact name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<String> {
        column_names(&self.columns)
    }

    pub fn column_db_types<C: Casing + ?Sized>(&self, casing: &C) -> BTreeMap<String, String> {
        column_db_types(&self.columns, casing)
    }

    /// Columns whose auto-generation flag equals `auto`.
    pub fn auto_columns(&self, auto: bool) -> Vec<&Column> {
        filter_by_auto(auto, &self.columns)
    }

    /// Columns whose default presence equals `defaults`.
    pub fn default_columns(&self, defaults: bool) -> Vec<&Column> {
        filter_by_default(defaults, &self.columns)
    }

    pub fn enum_columns(&self) -> Vec<&Column> {
        filter_by_enum(&self.columns)
    }

    /// Compute a SHA256 hash of the column list.
    ///
    /// Two tables with the same columns in the same order hash identically,
    /// so the hash tells whether regenerating code would change anything.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_vec(&self.columns).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(&json);
        format!("{:x}", hasher.finalize())
    }
}

/// Check the column invariants of a table.
///
/// Rejects empty names, empty native types, duplicate names, and array
/// element types on columns that are not arrays.
pub fn validate_columns(table: &Table) -> Result<()> {
    let full_name = table.full_name();
    let mut seen = HashSet::with_capacity(table.columns.len());

    for (idx, col) in table.columns.iter().enumerate() {
        if col.name.is_empty() {
            return Err(MetaError::invalid_column(
                &full_name,
                format!("#{}", idx + 1),
                "column name cannot be empty",
            ));
        }
        if col.db_type.is_empty() {
            return Err(MetaError::invalid_column(
                &full_name,
                &col.name,
                "db_type cannot be empty",
            ));
        }
        if !seen.insert(col.name.as_str()) {
            return Err(MetaError::invalid_column(
                &full_name,
                &col.name,
                "duplicate column name",
            ));
        }
        if col.arr_type().is_some() && !col.is_array() {
            return Err(MetaError::invalid_column(
                &full_name,
                &col.name,
                format!("arr_type set on non-array type '{}'", col.db_type),
            ));
        }
    }

    Ok(())
}
