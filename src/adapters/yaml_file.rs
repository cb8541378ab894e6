// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML settings-file source adapter.
//!
//! This module provides the flattening YAML parser and the discoverable
//! settings-file source built on top of it.

use crate::adapters::ResourceLocator;
use crate::domain::{ConfigError, Result};
use crate::ports::{SettingsParser, SettingsSource};
use std::collections::HashMap;
use std::fs;

/// Maximum allowed size for a settings file (10MB).
/// Prevents a stray path from pulling an enormous file into memory.
const MAX_SETTINGS_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// YAML parser implementation.
///
/// Converts YAML documents into flat key/value maps using dot notation for
/// nested structures, which is how the daemon's dotted setting names are
/// written in the files:
///
/// ```yaml
/// ranger:
///   tagsync:
///     enabled: true
/// ```
///
/// parses to `ranger.tagsync.enabled` → `"true"`.
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Flattens a YAML value into a flat map with dot notation keys.
    fn flatten(value: &serde_yaml::Value, prefix: &str, out: &mut HashMap<String, String>) {
        match value {
            serde_yaml::Value::Mapping(map) => {
                for (key, val) in map {
                    if let Some(key_str) = key.as_str() {
                        let new_prefix = if prefix.is_empty() {
                            key_str.to_string()
                        } else {
                            format!("{}.{}", prefix, key_str)
                        };
                        Self::flatten(val, &new_prefix, out);
                    }
                }
            }
            serde_yaml::Value::Sequence(seq) => {
                for (i, val) in seq.iter().enumerate() {
                    let new_prefix = format!("{}.{}", prefix, i);
                    Self::flatten(val, &new_prefix, out);
                }
            }
            serde_yaml::Value::String(s) => {
                out.insert(prefix.to_string(), s.clone());
            }
            serde_yaml::Value::Number(n) => {
                out.insert(prefix.to_string(), n.to_string());
            }
            serde_yaml::Value::Bool(b) => {
                out.insert(prefix.to_string(), b.to_string());
            }
            serde_yaml::Value::Null => {
                out.insert(prefix.to_string(), String::new());
            }
            _ => {}
        }
    }
}

impl SettingsParser for YamlParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }

        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("invalid YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        let mut out = HashMap::new();
        Self::flatten(&value, "", &mut out);
        Ok(out)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// A discoverable YAML settings file.
///
/// The file is addressed by its logical name and located at load time through
/// a [`ResourceLocator`]; a name no search location can resolve yields
/// [`ConfigError::SourceNotFound`], which the resolver treats as "this layer
/// is absent".
///
/// # Examples
///
/// ```rust,no_run
/// use tagsync_config::adapters::{ResourceLocator, YamlSettingsFile};
/// use tagsync_config::ports::SettingsSource;
///
/// let source = YamlSettingsFile::new("ranger-tagsync-site.yaml", ResourceLocator::new());
/// let values = source.load();
/// ```
#[derive(Debug, Clone)]
pub struct YamlSettingsFile {
    /// Logical file name, resolved through the locator.
    name: String,
    locator: ResourceLocator,
    parser: YamlParser,
}

impl YamlSettingsFile {
    /// Creates a source for the named settings file.
    pub fn new(name: impl Into<String>, locator: ResourceLocator) -> Self {
        Self {
            name: name.into(),
            locator,
            parser: YamlParser::new(),
        }
    }
}

impl SettingsSource for YamlSettingsFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        let path = self
            .locator
            .locate(&self.name)
            .ok_or_else(|| ConfigError::SourceNotFound {
                name: self.name.clone(),
            })?;

        let metadata = fs::metadata(&path)?;
        if metadata.len() > MAX_SETTINGS_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: self.name.clone(),
                message: format!(
                    "settings file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_SETTINGS_FILE_SIZE
                ),
                source: None,
            });
        }

        let content = fs::read_to_string(&path)?;
        tracing::info!(name = %self.name, path = %path.display(), "loading settings");
        self.parser.parse(&content)
    }
}
