//! New Relic integration gate.
//!
//! Decides whether New Relic instrumentation should run and which license
//! key it should use. The decision is made once, at construction, from the
//! application's settings mapping; the instrumentation itself is consumed
//! elsewhere through [`NewRelicConfig::is_enabled`] and
//! [`NewRelicConfig::api_key`].

use std::env;

use serde_json::Value;
use tracing::info;

use crate::utils::{bool_value, string_value};

/// Settings key holding the enablement flag.
const ENABLED_KEY: &str = "ENABLED";

/// Settings key holding the license key.
const LICENSE_KEY: &str = "NEW_RELIC_KEY";

/// New Relic configuration
///
/// Enablement is fixed at construction and requires both the enablement flag
/// and a non-empty license key. The key itself may be replaced later, e.g.
/// by a remote override, without touching the enablement decision.
#[derive(Clone, Debug, Default)]
pub struct NewRelicConfig {
    enabled: bool,
    api_key: String,
}

impl NewRelicConfig {
    /// Build the configuration from a settings mapping.
    ///
    /// Recognized keys are `ENABLED` (coerced to a boolean) and
    /// `NEW_RELIC_KEY` (must be a string). A missing or malformed mapping
    /// degrades to the disabled, empty-key state; construction never fails
    /// and never logs.
    pub fn from_value(value: Option<&Value>) -> Self {
        let section = value.and_then(Value::as_object);
        let api_key = string_value(section.and_then(|s| s.get(LICENSE_KEY)));
        let enabled =
            bool_value(section.and_then(|s| s.get(ENABLED_KEY))) && !api_key.is_empty();

        Self { enabled, api_key }
    }

    /// Load configuration from environment variables, falling back to defaults
    ///
    /// `NEW_RELIC_KEY` supplies the license key; `NEW_RELIC_ENABLED`
    /// defaults to `"true"` when unset, so setting the key alone is enough.
    /// The same rule applies as for [`NewRelicConfig::from_value`]: no key,
    /// no enablement.
    pub fn from_env() -> Self {
        let api_key = env::var("NEW_RELIC_KEY").unwrap_or_default();
        let enabled = env::var("NEW_RELIC_ENABLED")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(true)
            && !api_key.is_empty();

        Self { enabled, api_key }
    }

    /// Whether the integration should run.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The license key; empty when none was configured.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Replace the license key.
    ///
    /// Does not re-derive the enablement decision: a gate that came up
    /// disabled stays disabled, and one that came up enabled stays enabled
    /// even if the new key is empty.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }
}

/// Log the integration's state at startup. The license key itself is never
/// logged.
pub fn init_tracing(config: &NewRelicConfig) -> Result<(), Box<dyn std::error::Error>> {
    if !config.is_enabled() {
        info!("New Relic integration disabled");
        return Ok(());
    }

    info!("New Relic integration initialized");

    Ok(())
}

/// Shutdown - placeholder for future implementation
pub fn shutdown_tracing() {
    info!("New Relic integration shutdown");
}
