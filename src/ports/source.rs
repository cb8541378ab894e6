// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings source trait definition.
//!
//! This module defines the `SettingsSource` trait, the primary port for
//! contributing key/value pairs to the merged settings map.

use crate::domain::Result;
use std::collections::HashMap;

/// A named source contributing flat key/value pairs to the merged settings.
///
/// Sources are loaded exactly once, in the order the resolver was configured
/// with; on a key collision the later source's value wins. A source that
/// fails to load is skipped with a warning — a missing settings file never
/// aborts construction.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a built resolver can be shared
/// across threads.
///
/// # Examples
///
/// ```rust
/// use tagsync_config::ports::SettingsSource;
/// use tagsync_config::domain::Result;
/// use std::collections::HashMap;
///
/// struct Fixed;
///
/// impl SettingsSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn load(&self) -> Result<HashMap<String, String>> {
///         Ok(HashMap::from([(
///             "ranger.tagsync.enabled".to_string(),
///             "true".to_string(),
///         )]))
///     }
/// }
/// ```
pub trait SettingsSource: Send + Sync {
    /// Returns the name of this source, used in log messages.
    fn name(&self) -> &str;

    /// Produces this source's key/value pairs.
    ///
    /// Returns `Err` when the source cannot be located, read or parsed. The
    /// resolver treats any error as "this source is absent" — the error is
    /// logged and the remaining sources are still merged.
    fn load(&self) -> Result<HashMap<String, String>>;
}
