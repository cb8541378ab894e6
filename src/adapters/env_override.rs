// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-environment override lookup.
//!
//! After the file sources are merged, any key already present in the settings
//! map may be overridden from the process environment. The variable is looked
//! up under the key as spelled and, failing that, under the conventional
//! `SCREAMING_SNAKE` spelling (`ranger.tagsync.enabled` becomes
//! `RANGER_TAGSYNC_ENABLED`). The override pass never introduces keys — that
//! invariant lives in [`crate::domain::SettingsMap::apply_overrides`], which
//! only consults this lookup for keys the merge produced.

use std::collections::HashMap;

/// Looks up per-key override values in the process environment.
///
/// # Examples
///
/// ```rust
/// use tagsync_config::adapters::EnvOverride;
/// use std::collections::HashMap;
///
/// let overrides = EnvOverride::with_values(HashMap::from([(
///     "RANGER_TAGSYNC_ENABLED".to_string(),
///     "false".to_string(),
/// )]));
/// assert_eq!(
///     overrides.get("ranger.tagsync.enabled"),
///     Some("false".to_string())
/// );
/// ```
#[derive(Debug, Default)]
pub struct EnvOverride {
    /// Fixed values consulted instead of the live environment.
    values: Option<HashMap<String, String>>,
}

impl EnvOverride {
    /// Creates an override lookup backed by the live process environment.
    pub fn new() -> Self {
        Self { values: None }
    }

    /// Creates an override lookup backed by fixed values.
    ///
    /// Intended for tests. The same verbatim-then-`SCREAMING_SNAKE` lookup
    /// order applies to the fixed values.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: Some(values),
        }
    }

    /// Returns the override value for `key`, if one is supplied.
    pub fn get(&self, key: &str) -> Option<String> {
        let env_key = screaming_snake(key);
        match &self.values {
            Some(map) => map.get(key).or_else(|| map.get(&env_key)).cloned(),
            None => std::env::var(key).or_else(|_| std::env::var(&env_key)).ok(),
        }
    }
}

/// `ranger.tagsync.enabled` → `RANGER_TAGSYNC_ENABLED`
fn screaming_snake(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '.' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}
