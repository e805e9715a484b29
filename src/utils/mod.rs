//! Utility functions and helper modules.
//!
//! This module contains helpers used throughout the crate, currently the
//! loose value coercion rules for settings mappings.

pub mod value;

pub use value::*;
