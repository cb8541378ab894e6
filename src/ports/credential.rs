// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential store reader trait definition.
//!
//! The credential store keeps passwords out of plaintext settings files. It
//! is addressed by a filesystem path plus an alias naming the secret to
//! retrieve, and its internals are opaque to this crate.

use crate::domain::Result;
use std::path::Path;

/// Reads decrypted secrets out of an external credential store.
///
/// The resolver swallows every error from this trait: to accessor callers a
/// reader failure is indistinguishable from an absent credential. Readers
/// should still return precise errors so the swallowed failure can be logged.
pub trait CredentialReader: Send + Sync {
    /// Returns a short identifier for this reader, used in log messages.
    fn name(&self) -> &str;

    /// Retrieves the decrypted secret stored under `alias` in the store at
    /// `store_path`.
    fn read(&self, store_path: &Path, alias: &str) -> Result<String>;
}
