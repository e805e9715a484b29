//! Application settings document.
//!
//! The settings document is a JSON object bundled with the application.
//! Loading it is the only place errors can surface; the per-integration
//! configs built from a loaded document degrade silently instead of
//! failing.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::newrelic::NewRelicConfig;

/// Settings section holding the New Relic mapping.
const NEW_RELIC_SECTION: &str = "NEW_RELIC";

/// Environment variable naming the settings file to load.
pub const SETTINGS_PATH_VAR: &str = "APP_SETTINGS_PATH";

/// Errors that can occur while loading a settings document
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings document is not a JSON object")]
    NotAnObject,
}

/// Parsed application settings document
///
/// Wraps the top-level JSON object and hands each integration its own
/// section. An empty document is valid and leaves every integration off.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppSettings {
    values: Map<String, Value>,
}

impl AppSettings {
    /// Parse a settings document from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self, SettingsError> {
        let value: Value = serde_json::from_str(raw)?;
        match value {
            Value::Object(values) => Ok(Self { values }),
            _ => Err(SettingsError::NotAnObject),
        }
    }

    /// Read and parse a settings document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Load the settings file named by `APP_SETTINGS_PATH`.
    ///
    /// An unset variable yields an empty document rather than an error, so
    /// an application without a settings file starts with every integration
    /// off.
    pub fn from_env() -> Result<Self, SettingsError> {
        match env::var(SETTINGS_PATH_VAR) {
            Ok(path) => Self::from_path(path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Raw access to a top-level section.
    pub fn section(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The New Relic gate derived from this document.
    pub fn new_relic(&self) -> NewRelicConfig {
        NewRelicConfig::from_value(self.section(NEW_RELIC_SECTION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let settings = AppSettings::from_json_str("{}").unwrap();

        assert!(settings.section(NEW_RELIC_SECTION).is_none());
        assert!(!settings.new_relic().is_enabled());
    }

    #[test]
    fn test_new_relic_section_wiring() {
        let settings = AppSettings::from_json_str(
            r#"{"NEW_RELIC": {"ENABLED": true, "NEW_RELIC_KEY": "ABC123"}}"#,
        )
        .unwrap();

        let config = settings.new_relic();
        assert!(config.is_enabled());
        assert_eq!(config.api_key(), "ABC123");
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = AppSettings::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, SettingsError::NotAnObject));
    }

    #[test]
    fn test_invalid_json() {
        let err = AppSettings::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }
}
