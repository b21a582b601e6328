//! Configuration loading and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub tables: TablesConfig,
}

/// Reference table override files
///
/// Each entry replaces the corresponding embedded table with a JSON file
/// on disk; unset entries keep the built-in data.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TablesConfig {
    pub owners: Option<PathBuf>,
    pub equipment: Option<PathBuf>,
    pub sizes: Option<PathBuf>,
    pub types: Option<PathBuf>,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [tables]
            owners = "data/owners.json"
            types = "data/types.json"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(
            config.tables.owners,
            Some(PathBuf::from("data/owners.json"))
        );
        assert!(config.tables.equipment.is_none());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.tables.owners.is_none());
    }
}
