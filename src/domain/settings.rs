// SPDX-License-Identifier: MIT OR Apache-2.0

//! The merged settings map and its lookup policies.
//!
//! `SettingsMap` is the single source of truth for every accessor on the
//! resolver: it is assembled once, by merging the flat key/value maps the
//! configured sources produce, and is never mutated afterwards. The typed
//! lookups on this type encode the daemon's defaulting policies — a toggle
//! that is lenient about its spelling, and intervals that silently fall back
//! to a documented default rather than failing at startup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// A merged, case-sensitive mapping from setting key to string value.
///
/// Sources are merged in load order: a key supplied by a later source
/// replaces the value an earlier source supplied. After the merge, an
/// override pass may replace values for keys that are already present; it can
/// never introduce new keys.
///
/// # Examples
///
/// ```
/// use tagsync_config::domain::SettingsMap;
/// use std::collections::HashMap;
///
/// let mut settings = SettingsMap::new();
/// settings.merge(HashMap::from([("a".to_string(), "1".to_string())]));
/// settings.merge(HashMap::from([("a".to_string(), "2".to_string())]));
/// assert_eq!(settings.get("a"), Some("2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsMap {
    entries: HashMap<String, String>,
}

impl SettingsMap {
    /// Creates an empty settings map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Merges a source's key/value pairs into the map.
    ///
    /// Keys already present are overwritten; this is what gives later sources
    /// precedence over earlier ones.
    pub fn merge(&mut self, values: HashMap<String, String>) {
        self.entries.extend(values);
    }

    /// Replaces values for keys already in the map when `lookup` supplies one.
    ///
    /// Keys for which `lookup` returns `None` keep their merged value. Keys
    /// absent from the map are never added by this pass.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let overridden: Vec<(String, String)> = self
            .entries
            .keys()
            .filter_map(|key| lookup(key).map(|value| (key.clone(), value)))
            .collect();
        for (key, value) in overridden {
            tracing::debug!(key = %key, "applying override");
            self.entries.insert(key, value);
        }
    }

    /// Returns the raw value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value for `key` if it is present and not blank.
    ///
    /// Blank means empty or whitespace-only. The returned value itself is not
    /// trimmed.
    pub fn get_non_blank(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.trim().is_empty())
    }

    /// Returns the value for `key`, or `default` when the key is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Boolean policy shared by the enabled-style toggles.
    ///
    /// An absent key yields `default`. A present value yields `true` exactly
    /// when it equals `"true"` after trimming, ignoring case; any other
    /// value, unparsable ones included, yields `false`.
    pub fn get_flag(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            None => default,
            Some(value) => value.trim().eq_ignore_ascii_case("true"),
        }
    }

    /// Millisecond-interval policy shared by the periodic-work settings.
    ///
    /// A missing, blank or unparsable value falls back to `default` without
    /// raising; a parsable value is taken as a count of milliseconds.
    pub fn get_millis_or(&self, key: &str, default: Duration) -> Duration {
        match self.get_non_blank(key) {
            Some(value) => match value.parse::<u64>() {
                Ok(millis) => Duration::from_millis(millis),
                Err(_) => {
                    tracing::debug!(key, value, "ignoring unparsable interval");
                    default
                }
            },
            None => default,
        }
    }

    /// Whether `key` is present in the map.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The number of settings in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no settings at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl From<HashMap<String, String>> for SettingsMap {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}
