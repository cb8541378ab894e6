// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the
//! interfaces between the resolver and its collaborators. Concrete
//! implementations live in the adapters layer; tests substitute their own.

pub mod credential;
pub mod parser;
pub mod principal;
pub mod source;

// Re-export commonly used types
pub use credential::CredentialReader;
pub use parser::SettingsParser;
pub use principal::PrincipalFormatter;
pub use source::SettingsSource;
