//! Per-table summaries printed by `colmeta inspect`.

use std::collections::BTreeMap;
use std::fmt;

use colmeta::columns::{is_enum_normal, parse_enum_name, parse_enum_values};
use colmeta::{Casing, Column, Table};
use serde::Serialize;

/// Everything a renderer would derive from one table.
#[derive(Debug, Serialize)]
pub struct TableReport<'a> {
    pub table: String,
    pub fingerprint: String,
    pub names: Vec<String>,
    pub db_types: BTreeMap<String, String>,
    pub auto_generated: Vec<&'a str>,
    pub app_supplied: Vec<&'a str>,
    pub with_default: Vec<&'a str>,
    pub without_default: Vec<&'a str>,
    pub enums: Vec<EnumReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct EnumReport<'a> {
    pub column: &'a str,
    pub name: Option<&'a str>,
    pub values: Vec<String>,
    pub normal: bool,
}

fn names<'a>(cols: Vec<&'a Column>) -> Vec<&'a str> {
    cols.into_iter().map(|c| c.name.as_str()).collect()
}

impl<'a> TableReport<'a> {
    pub fn build<C: Casing + ?Sized>(table: &'a Table, casing: &C) -> Self {
        let enums = table
            .enum_columns()
            .into_iter()
            .map(|c| {
                let values = parse_enum_values(&c.db_type);
                EnumReport {
                    column: &c.name,
                    name: parse_enum_name(&c.db_type),
                    normal: is_enum_normal(&values),
                    values,
                }
            })
            .collect();

        Self {
            table: table.full_name(),
            fingerprint: table.fingerprint(),
            names: table.column_names(),
            db_types: table.column_db_types(casing),
            auto_generated: names(table.auto_columns(true)),
            app_supplied: names(table.auto_columns(false)),
            with_default: names(table.default_columns(true)),
            without_default: names(table.default_columns(false)),
            enums,
        }
    }
}

impl fmt::Display for TableReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.table)?;
        writeln!(f, "  fingerprint:     {}", self.fingerprint)?;
        writeln!(f, "  columns:         {}", self.names.join(", "))?;
        writeln!(f, "  types:")?;
        for (key, db_type) in &self.db_types {
            writeln!(f, "    {} = {}", key, db_type)?;
        }
        writeln!(f, "  auto generated:  {}", self.auto_generated.join(", "))?;
        writeln!(f, "  app supplied:    {}", self.app_supplied.join(", "))?;
        writeln!(f, "  with default:    {}", self.with_default.join(", "))?;
        writeln!(f, "  without default: {}", self.without_default.join(", "))?;
        for e in &self.enums {
            writeln!(
                f,
                "  enum {} ({}): {}{}",
                e.column,
                e.name.unwrap_or("-"),
                e.values.join(" | "),
                if e.normal { "" } else { " [not identifier-safe]" }
            )?;
        }
        Ok(())
    }
}
