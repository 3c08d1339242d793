//! # colmeta
//!
//! Column metadata model and derivation layer for schema-driven code
//! generators.
//!
//! Introspectors describe each table column once as a [`Column`]. Template
//! renderers then derive what they need from a table's columns:
//!
//! - **Names** in column order, for deterministic field ordering
//! - **Type maps** from a cased identifier to the native database type
//! - **Partitions** by auto-generation, default presence and enum type,
//!   deciding which columns take part in generated insert/update code
//!
//! All projections and filters are pure and never fail.
//!
//! ## Example
//!
//! ```rust
//! use colmeta::columns::{column_db_types, filter_by_default, filter_by_enum};
//! use colmeta::core::{CasingStyle, Column};
//!
//! let columns = vec![
//!     Column::new("id", "integer").with_default("nextval('users_id_seq')"),
//!     Column::new("user_name", "text"),
//!     Column::new("mood", "enum.mood('sad','ok')"),
//! ];
//!
//! let types = column_db_types(&columns, &CasingStyle::Title);
//! assert_eq!(types["ID"], "integer");
//! assert_eq!(types["UserName"], "text");
//!
//! let insertable = filter_by_default(false, &columns);
//! assert_eq!(insertable.len(), 2);
//! assert_eq!(filter_by_enum(&columns)[0].name, "mood");
//! ```

pub mod columns;
pub mod config;
pub mod core;
pub mod error;
pub mod loader;

// Re-exports for convenient access
pub use columns::{
    column_db_types, column_names, filter_by_auto, filter_by_default, filter_by_enum,
};
pub use config::{Config, TableSelection};
pub use crate::core::{Casing, CasingStyle, Column, DialectExt, Table};
pub use error::{MetaError, Result};
pub use loader::SchemaDocument;
