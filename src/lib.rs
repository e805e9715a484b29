//! Configuration gate for optional New Relic instrumentation.
//!
//! Applications ship a settings document (a JSON object) that may or may not
//! ask for New Relic to be turned on. This crate loads that document and
//! derives the one decision the integration needs: should it run, and with
//! which license key. The instrumentation itself lives elsewhere; only the
//! gate is here.
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `config/` - Settings document loading and section access
//! - `newrelic/` - The New Relic enablement gate and init helpers
//! - `utils/` - Loose value coercion for heterogeneous settings
//!
//! ## Quick Start
//!
//! ```
//! use newrelic_config::AppSettings;
//!
//! let settings = AppSettings::from_json_str(
//!     r#"{"NEW_RELIC": {"ENABLED": true, "NEW_RELIC_KEY": "ABC123"}}"#,
//! )?;
//! let new_relic = settings.new_relic();
//! assert!(new_relic.is_enabled());
//! assert_eq!(new_relic.api_key(), "ABC123");
//! # Ok::<(), newrelic_config::SettingsError>(())
//! ```

// Core modules
pub mod config;
pub mod newrelic;
pub mod utils;

// Re-export commonly used types and functions for convenience
pub use config::{AppSettings, SettingsError};
pub use newrelic::{NewRelicConfig, init_tracing, shutdown_tracing};
pub use utils::{bool_value, string_value};
