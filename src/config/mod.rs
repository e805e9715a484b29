//! Configuration structures and loading utilities.
//!
//! This module contains the settings document type the application loads at
//! startup, including file and environment loading and default values.

pub mod settings;

pub use settings::*;
