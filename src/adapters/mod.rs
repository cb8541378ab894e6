// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing concrete implementations.
//!
//! This module contains the concrete implementations of the port traits: the
//! settings-file locator, the YAML file source and parser, the environment
//! override lookup, the keyfile credential reader and the `_HOST` principal
//! formatter.

pub mod env_override;
pub mod keyfile;
pub mod locator;
pub mod principal;
pub mod yaml_file;

// Re-export adapters
pub use env_override::EnvOverride;
pub use keyfile::KeyfileCredentialReader;
pub use locator::ResourceLocator;
pub use principal::HostPrincipalFormatter;
pub use yaml_file::{YamlParser, YamlSettingsFile};
