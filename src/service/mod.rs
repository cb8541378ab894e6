// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration resolver.
//!
//! This module contains `TagSyncConfig`, the resolver the daemon constructs
//! once at startup, and its builder.

pub mod resolver;

// Re-export commonly used types
pub use resolver::{TagSyncConfig, TagSyncConfigBuilder};
