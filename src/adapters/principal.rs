// SPDX-License-Identifier: MIT OR Apache-2.0

//! `_HOST` substitution for Kerberos service principals.

use crate::domain::{ConfigError, Result};
use crate::ports::PrincipalFormatter;

/// The placeholder a service principal uses for the local hostname.
const HOSTNAME_PATTERN: &str = "_HOST";

/// Expands `primary/_HOST@REALM` principals with the local hostname.
///
/// A principal that does not split into exactly `primary/instance@realm`, or
/// whose instance is not the `_HOST` placeholder, is returned unchanged —
/// including the empty string. The hostname is lowercased before
/// substitution, matching how service principals are canonicalized.
///
/// # Examples
///
/// ```
/// use tagsync_config::adapters::HostPrincipalFormatter;
/// use tagsync_config::ports::PrincipalFormatter;
///
/// let formatter = HostPrincipalFormatter::new();
/// let principal = formatter
///     .format("tagsync/_HOST@EXAMPLE.COM", "Host1.example.com")
///     .unwrap();
/// assert_eq!(principal, "tagsync/host1.example.com@EXAMPLE.COM");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPrincipalFormatter;

impl HostPrincipalFormatter {
    /// Creates a new formatter.
    pub fn new() -> Self {
        HostPrincipalFormatter
    }
}

impl PrincipalFormatter for HostPrincipalFormatter {
    fn format(&self, raw_principal: &str, hostname: &str) -> Result<String> {
        let components: Vec<&str> = raw_principal.split(['/', '@']).collect();
        if components.len() != 3 || components[1] != HOSTNAME_PATTERN {
            return Ok(raw_principal.to_string());
        }

        if hostname.trim().is_empty() {
            return Err(ConfigError::PrincipalError {
                message: format!(
                    "cannot replace {} pattern: local hostname is unknown",
                    HOSTNAME_PATTERN
                ),
            });
        }

        Ok(format!(
            "{}/{}@{}",
            components[0],
            hostname.to_lowercase(),
            components[2]
        ))
    }
}
