// SPDX-License-Identifier: MIT OR Apache-2.0

//! Kerberos principal formatter trait definition.

use crate::domain::Result;

/// Expands a configured Kerberos principal into a concrete one.
///
/// Implementations receive the raw configured principal (possibly empty) and
/// the canonical local hostname the resolver computed at construction time.
/// The resolver turns any error from this trait into an absent principal.
pub trait PrincipalFormatter: Send + Sync {
    /// Formats `raw_principal` for the host named `hostname`.
    fn format(&self, raw_principal: &str, hostname: &str) -> Result<String>;
}
