//! Inventory configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed configuration
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Values out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Per-session inventory settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Grid columns
    pub grid_width: u32,
    /// Grid rows
    pub grid_height: u32,
    /// Reject equipment whose slot affinity does not match
    pub strict_equipment: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            grid_width: 8,
            grid_height: 6,
            strict_equipment: false,
        }
    }
}

impl InventoryConfig {
    pub fn new(grid_width: u32, grid_height: u32) -> Self {
        Self {
            grid_width,
            grid_height,
            ..Default::default()
        }
    }

    /// Set strict equipment validation
    pub fn with_strict_equipment(mut self, strict: bool) -> Self {
        self.strict_equipment = strict;
        self
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InventoryConfig::default();

        assert_eq!(config.grid_width, 8);
        assert_eq!(config.grid_height, 6);
        assert!(!config.strict_equipment);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = InventoryConfig::from_json_str(r#"{ "grid_width": 10 }"#).unwrap();

        assert_eq!(config, InventoryConfig::new(10, 6));
    }

    #[test]
    fn test_strict_flag() {
        let config =
            InventoryConfig::from_json_str(r#"{ "strict_equipment": true }"#).unwrap();

        assert!(config.strict_equipment);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let result = InventoryConfig::from_json_str(r#"{ "grid_height": 0 }"#);

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            InventoryConfig::from_json_str("grid_width = 8"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("void_grid_inventory_missing_config.json");
        let _ = fs::remove_file(&path);

        assert!(matches!(InventoryConfig::load(&path), Err(ConfigError::Io(_))));
    }
}
