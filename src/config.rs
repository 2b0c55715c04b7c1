// Soussou Morph Configuration
// Range bounds, connector token, layout and lexicon passed explicitly to every component

use crate::lexicon::Lexicon;
use crate::types::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default additive connector ("and" between magnitude segments)
pub const DEFAULT_CONNECTOR: &str = "nŭn";

/// Largest number expressible with four magnitude tiers
pub const MAX_SUPPORTED: u32 = 9999;

/// Engine configuration
///
/// Every field has a default, so a partial JSON document is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Smallest accepted number (inclusive). Default 1.
    #[serde(default = "default_min_number")]
    pub min_number: u32,
    /// Largest accepted number (inclusive). Default 9999.
    #[serde(default = "default_max_number")]
    pub max_number: u32,
    /// Token joining two magnitude segments. Default "nŭn".
    #[serde(default = "default_connector")]
    pub connector: String,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub lexicon: Lexicon,
}

fn default_min_number() -> u32 {
    1
}
fn default_max_number() -> u32 {
    9999
}
fn default_connector() -> String {
    DEFAULT_CONNECTOR.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_number: default_min_number(),
            max_number: default_max_number(),
            connector: default_connector(),
            layout: LayoutConfig::default(),
            lexicon: Lexicon::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            min = config.min_number,
            max = config.max_number,
            "loaded engine config"
        );
        Ok(config)
    }

    /// Check range bounds and connector
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_number == 0
            || self.min_number > self.max_number
            || self.max_number > MAX_SUPPORTED
        {
            return Err(ConfigError::InvalidRange {
                min: self.min_number,
                max: self.max_number,
            });
        }
        if self.connector.trim().is_empty() {
            return Err(ConfigError::EmptyConnector);
        }
        Ok(())
    }

    /// Whether `number` lies inside the configured range
    #[inline]
    pub fn in_range(&self, number: u32) -> bool {
        (self.min_number..=self.max_number).contains(&number)
    }
}

/// Deterministic tree layout parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Root anchor x
    pub root_x: f64,
    /// Root anchor y
    pub root_y: f64,
    /// Vertical distance between tree levels
    pub level_height: f64,
    /// Horizontal width shared by a group of siblings
    pub spread: f64,
    /// Lower bound on sibling spacing
    pub min_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            root_x: 400.0,
            root_y: 40.0,
            level_height: 90.0,
            spread: 600.0,
            min_spacing: 110.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.connector, "nŭn");
        assert!(config.in_range(1));
        assert!(config.in_range(9999));
        assert!(!config.in_range(0));
        assert!(!config.in_range(10_000));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EngineConfig::from_json_str(r#"{"max_number": 99}"#).unwrap();
        assert_eq!(config.min_number, 1);
        assert_eq!(config.max_number, 99);
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_partial_layout_uses_defaults() {
        let config = EngineConfig::from_json_str(r#"{"layout": {"min_spacing": 50.0}}"#).unwrap();
        assert_eq!(config.layout.min_spacing, 50.0);
        assert_eq!(config.layout.spread, 600.0);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let result = EngineConfig::from_json_str(r#"{"min_number": 50, "max_number": 10}"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRange { min: 50, max: 10 })
        ));

        let result = EngineConfig::from_json_str(r#"{"min_number": 0}"#);
        assert!(matches!(result, Err(ConfigError::InvalidRange { .. })));

        let result = EngineConfig::from_json_str(r#"{"max_number": 10000}"#);
        assert!(matches!(result, Err(ConfigError::InvalidRange { .. })));
    }

    #[test]
    fn test_empty_connector_rejected() {
        let result = EngineConfig::from_json_str(r#"{"connector": "  "}"#);
        assert!(matches!(result, Err(ConfigError::EmptyConnector)));
    }

    #[test]
    fn test_bad_json_rejected() {
        let result = EngineConfig::from_json_str("{not json");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }
}
