//! Schema documents: introspected tables handed over as YAML or JSON.
//!
//! ```yaml
//! tables:
//!   - schema: public
//!     name: users
//!     columns:
//!       - name: id
//!         type: i32
//!         db_type: integer
//!         default: nextval('users_id_seq'::regclass)
//!       - name: tags
//!         type: Vec<String>
//!         db_type: ARRAY
//!         dialect:
//!           kind: postgres
//!           arr_type: text
//!           udt_name: _text
//! ```
//!
//! Loading is the one place column invariants are checked. Once a document
//! is loaded, the projectors and filters can rely on them.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::TableSelection;
use crate::core::schema::{validate_columns, Table};
use crate::error::{MetaError, Result};

/// On-disk format of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension; anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// A set of introspected tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl SchemaDocument {
    /// Load and validate a schema document from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let doc = match DocumentFormat::from_path(path) {
            DocumentFormat::Json => Self::from_json(&content)?,
            DocumentFormat::Yaml => Self::from_yaml(&content)?,
        };
        info!(
            "Loaded {} tables from {}",
            doc.tables.len(),
            path.display()
        );
        Ok(doc)
    }

    /// Parse and validate a YAML schema document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let doc: SchemaDocument = serde_yaml::from_str(yaml)
            .map_err(|e| MetaError::InvalidDocument(format!("malformed YAML: {}", e)))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse and validate a JSON schema document.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: SchemaDocument = serde_json::from_str(json)
            .map_err(|e| MetaError::InvalidDocument(format!("malformed JSON: {}", e)))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Check table names and the column invariants of every table.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.tables.len());

        for table in &self.tables {
            if table.name.is_empty() {
                return Err(MetaError::InvalidDocument(
                    "table name cannot be empty".into(),
                ));
            }
            let full_name = table.full_name();
            if !seen.insert(full_name.clone()) {
                return Err(MetaError::InvalidDocument(format!(
                    "duplicate table '{}'",
                    full_name
                )));
            }
            validate_columns(table)?;
            debug!("{}: {} columns ok", full_name, table.columns.len());
        }

        Ok(())
    }

    /// Tables passing `selection`, in document order.
    pub fn select(&self, selection: &TableSelection) -> Vec<&Table> {
        self.tables.iter().filter(|t| selection.matches(t)).collect()
    }

    /// Find a table by bare or schema-qualified name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|t| t.name == name || t.full_name() == name)
    }
}
