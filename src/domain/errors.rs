// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for configuration acquisition.
//!
//! All errors use `thiserror`. None of them ever reach an accessor caller:
//! the resolver treats a failed source as absent and a failed credential
//! lookup as "no credential". The variants exist so that sources, parsers and
//! credential readers can report precisely what went wrong to the log.

use thiserror::Error;

/// The error type for source discovery, reading, parsing and credential
/// retrieval.
///
/// Marked `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A named settings source could not be located in any search root.
    #[error("settings source not found: {name}")]
    SourceNotFound {
        /// The logical file name that could not be located.
        name: String,
    },

    /// A settings source was located but could not be read.
    #[error("settings source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error.
        source_name: String,
        /// The error message.
        message: String,
        /// The underlying error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A settings file was read but its content could not be parsed.
    #[error("failed to parse settings: {message}")]
    ParseError {
        /// The error message.
        message: String,
        /// The underlying parsing error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The credential store could not produce a secret for an alias.
    #[error("credential store '{store}' could not resolve alias '{alias}': {message}")]
    CredentialError {
        /// The store path the reader was pointed at.
        store: String,
        /// The alias that was requested.
        alias: String,
        /// The error message.
        message: String,
    },

    /// A Kerberos principal could not be expanded for this host.
    #[error("cannot expand principal: {message}")]
    PrincipalError {
        /// The error message.
        message: String,
    },

    /// An I/O error occurred while reading a source.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
