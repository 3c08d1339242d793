//! Projections and filters over column collections.
//!
//! Everything here is a pure function of its input: no logging, no errors,
//! no hidden state. Output order always follows input order, so generated
//! code stays diff-stable across regenerations.
//!
//! - [`project`]: name list and normalized-name → native-type map
//! - [`filter`]: order-preserving partitions by auto-generation, default
//!   presence and enum type
//! - [`enums`]: enum name and value parsing from native type strings

pub mod enums;
pub mod filter;
pub mod project;

pub use enums::{is_enum_normal, parse_enum_name, parse_enum_values};
pub use filter::{filter_by_auto, filter_by_default, filter_by_enum, filter_columns};
pub use project::{column_db_types, column_names};
