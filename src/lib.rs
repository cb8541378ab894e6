// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration acquisition for the tagsync daemon.
//!
//! The daemon reads its settings from layered YAML files that are discovered
//! at startup, merged in a fixed precedence order and then frozen. This crate
//! owns that procedure: it locates the files, merges them into a single
//! settings map, applies process-environment overrides, and exposes typed
//! accessors for every setting the daemon consumes — including a credential
//! policy that prefers inline passwords over an external credential store.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: the merged settings map with its lookup policies, and
//!   the error types
//! - **Ports**: trait seams for sources, parsers, the credential store and
//!   the Kerberos principal formatter
//! - **Adapters**: settings-file discovery, YAML files, environment
//!   overrides, keyfile credentials, `_HOST` principal expansion
//! - **Service**: the resolver itself, built once through its builder and
//!   read-only afterwards
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tagsync_config::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config = TagSyncConfig::builder().build();
//! if config.is_enabled() {
//!     let _endpoint = config.tag_admin_rest_url();
//!     let _interval = config.atlas_download_interval();
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Construction is best-effort by design: a settings file that cannot be
//! found or read is logged and skipped, and every accessor substitutes its
//! documented default instead of failing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for
/// convenient access.
pub mod prelude {
    pub use crate::adapters::{
        EnvOverride, HostPrincipalFormatter, KeyfileCredentialReader, ResourceLocator, YamlParser,
        YamlSettingsFile,
    };
    pub use crate::domain::{ConfigError, Result, SettingsMap};
    pub use crate::ports::{CredentialReader, PrincipalFormatter, SettingsParser, SettingsSource};
    pub use crate::service::{TagSyncConfig, TagSyncConfigBuilder};
}
