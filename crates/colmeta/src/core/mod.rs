//! Core metadata types.
//!
//! - [`schema`]: column and table metadata, dialect extension attributes,
//!   invariant validation
//! - [`casing`]: the injected identifier casing capability and the built-in
//!   conventions
//!
//! Introspectors build these values; everything downstream only reads them.

pub mod casing;
pub mod schema;

pub use casing::{title_case, Casing, CasingStyle};
pub use schema::{validate_columns, Column, DialectExt, Table, ENUM_PREFIX};
