//! Configuration validation.

use std::collections::HashSet;

use super::Config;
use crate::error::{MetaError, Result};

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    let selection = &config.tables;

    if selection.include.iter().any(|t| t.trim().is_empty()) {
        return Err(MetaError::Config(
            "tables.include cannot contain empty names".into(),
        ));
    }
    if selection.exclude.iter().any(|t| t.trim().is_empty()) {
        return Err(MetaError::Config(
            "tables.exclude cannot contain empty names".into(),
        ));
    }

    let included: HashSet<&str> = selection.include.iter().map(String::as_str).collect();
    if let Some(both) = selection
        .exclude
        .iter()
        .find(|t| included.contains(t.as_str()))
    {
        return Err(MetaError::Config(format!(
            "table '{}' is both included and excluded",
            both
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableSelection;
    use crate::core::CasingStyle;

    fn valid_config() -> Config {
        Config {
            casing: CasingStyle::Title,
            tables: TableSelection {
                include: vec!["users".to_string(), "orders".to_string()],
                exclude: vec!["schema_migrations".to_string()],
            },
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&valid_config()).is_ok());
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_include_entry() {
        let mut config = valid_config();
        config.tables.include.push("  ".to_string());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_exclude_entry() {
        let mut config = valid_config();
        config.tables.exclude.push(String::new());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_included_and_excluded() {
        let mut config = valid_config();
        config.tables.exclude.push("orders".to_string());
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("'orders' is both included and excluded"));
    }
}
