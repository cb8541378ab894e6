// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings parser trait definition.
//!
//! This module defines the `SettingsParser` trait, the interface for turning
//! a settings file's raw content into flat key/value pairs.

use crate::domain::Result;
use std::collections::HashMap;

/// Parses settings-file content into a flat key/value map.
///
/// Parsers flatten nested structures using dot notation, so a YAML document
/// like:
///
/// ```yaml
/// ranger:
///   tagsync:
///     enabled: true
/// ```
///
/// is parsed into `ranger.tagsync.enabled` → `"true"`. Every value is carried
/// as a string; typed interpretation happens at the accessor, not here.
pub trait SettingsParser {
    /// Parses raw file content into a flat key → value map.
    fn parse(&self, content: &str) -> Result<HashMap<String, String>>;

    /// File extensions (without the leading dot) this parser understands.
    fn supported_extensions(&self) -> &[&str];
}
