//! Error types for loading and validating column metadata.
//!
//! The projectors and filters in [`crate::columns`] never fail; these errors
//! only come from the boundaries that read schema documents and configuration.

use thiserror::Error;

/// Exit code for configuration errors.
pub const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for schema documents that violate column invariants.
pub const EXIT_INVALID_SCHEMA: u8 = 2;
/// Exit code for file system errors.
pub const EXIT_IO_ERROR: u8 = 7;

/// Main error type for column metadata operations.
#[derive(Error, Debug)]
pub enum MetaError {
    /// Configuration error (invalid YAML, conflicting options, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A column breaks one of the metadata invariants
    #[error("Invalid column {table}.{column}: {message}")]
    InvalidColumn {
        table: String,
        column: String,
        message: String,
    },

    /// The schema document as a whole is malformed
    #[error("Invalid schema document: {0}")]
    InvalidDocument(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MetaError {
    /// Create an InvalidColumn error
    pub fn invalid_column(
        table: impl Into<String>,
        column: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        MetaError::InvalidColumn {
            table: table.into(),
            column: column.into(),
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            MetaError::Config(_) | MetaError::Yaml(_) | MetaError::Json(_) => EXIT_CONFIG_ERROR,
            MetaError::InvalidColumn { .. } | MetaError::InvalidDocument(_) => {
                EXIT_INVALID_SCHEMA
            }
            MetaError::Io(_) => EXIT_IO_ERROR,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for column metadata operations.
pub type Result<T> = std::result::Result<T, MetaError>;
