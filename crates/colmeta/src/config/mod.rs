//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use crate::error::Result;
use sha2::{Digest, Sha256};
use std::path::Path;

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string. A blank document yields the
    /// defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Compute a SHA256 hash of the configuration.
    ///
    /// Combined with [`Table::fingerprint`](crate::core::Table::fingerprint)
    /// it identifies one generation input exactly.
    pub fn hash(&self) -> String {
        let yaml = serde_yaml::to_string(self).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(yaml.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CasingStyle;
    use crate::error::MetaError;
    use std::io::Write;

    #[test]
    fn test_from_yaml() {
        let yaml = "casing: upper_camel\ntables:\n  exclude: [schema_migrations]\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.casing, CasingStyle::UpperCamel);
        assert!(config.tables.include.is_empty());
        assert_eq!(config.tables.exclude, vec!["schema_migrations"]);
    }

    #[test]
    fn test_blank_yaml_is_default() {
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Config::from_yaml("casingg: title\n").unwrap_err();
        assert!(matches!(err, MetaError::Yaml(_)));
    }

    #[test]
    fn test_invalid_selection_rejected() {
        let yaml = "tables:\n  include: [users]\n  exclude: [users]\n";
        assert!(matches!(
            Config::from_yaml(yaml).unwrap_err(),
            MetaError::Config(_)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "casing: snake").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.casing, CasingStyle::Snake);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, MetaError::Io(_)));
    }

    #[test]
    fn test_hash_is_stable() {
        let a = Config::default();
        let mut b = Config::default();
        assert_eq!(a.hash(), b.hash());
        b.casing = CasingStyle::Snake;
        assert_ne!(a.hash(), b.hash());
    }
}
