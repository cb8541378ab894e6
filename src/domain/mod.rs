// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module holds the merged settings map, its lookup policies, and the
//! error types. It is independent of any particular source or file format.

pub mod errors;
pub mod settings;

// Re-export commonly used types
pub use errors::{ConfigError, Result};
pub use settings::SettingsMap;
