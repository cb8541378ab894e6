// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings-file discovery.
//!
//! A settings file is named, not pathed: `ranger-tagsync-site.yaml` may live
//! in the working directory during development, next to the installed binary,
//! or in a system configuration directory. The locator tries each location in
//! a fixed order and the first readable regular file wins. A name nothing can
//! resolve is not an error here — the caller decides what a missing source
//! means (for the resolver: log a warning and move on).

use directories::ProjectDirs;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Ordered search across the locations a settings file may live in.
///
/// The search order is:
///
/// 1. the name as given — an absolute path, or a path relative to the
///    working directory;
/// 2. the directory containing the running executable;
/// 3. the per-user configuration directory for the daemon;
/// 4. `/etc/tagsync` (Unix only).
///
/// When a name is joined to one of the later roots, leading path separators
/// are stripped first, so an absolute-looking name can still be found beneath
/// a search root.
#[derive(Debug, Clone)]
pub struct ResourceLocator {
    roots: Vec<PathBuf>,
}

impl ResourceLocator {
    /// Creates a locator with the default search order.
    pub fn new() -> Self {
        let mut roots = Vec::new();
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                roots.push(dir.to_path_buf());
            }
        }
        if let Some(dirs) = ProjectDirs::from("", "", "tagsync") {
            roots.push(dirs.config_dir().to_path_buf());
        }
        #[cfg(unix)]
        roots.push(PathBuf::from("/etc/tagsync"));

        Self { roots }
    }

    /// Creates a locator that searches only the given roots, in order.
    ///
    /// The as-given lookup against the working directory still runs first.
    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Resolves `name` to a readable regular file.
    ///
    /// Returns `None` when the name is blank or no location has the file.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        if name.trim().is_empty() {
            return None;
        }

        let direct = Path::new(name);
        if is_readable_file(direct) {
            return Some(direct.to_path_buf());
        }

        let relative = name.trim_start_matches(['/', '\\']);
        for root in &self.roots {
            let candidate = root.join(relative);
            if is_readable_file(&candidate) {
                return Some(candidate);
            }
        }

        None
    }
}

impl Default for ResourceLocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Exists, is a regular file, and can actually be opened for reading.
fn is_readable_file(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_locate_blank_name() {
        let locator = ResourceLocator::with_roots(vec![]);
        assert_eq!(locator.locate(""), None);
        assert_eq!(locator.locate("   "), None);
    }

    #[test]
    fn test_locate_missing_everywhere() {
        let dir = TempDir::new().unwrap();
        let locator = ResourceLocator::with_roots(vec![dir.path().to_path_buf()]);
        assert_eq!(locator.locate("no-such-file.yaml"), None);
    }

    #[test]
    fn test_locate_absolute_path_as_given() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "site.yaml", "a: 1\n");
        let locator = ResourceLocator::with_roots(vec![]);

        assert_eq!(locator.locate(path.to_str().unwrap()), Some(path));
    }

    #[test]
    fn test_locate_searches_roots_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let in_first = write_file(&first, "site.yaml", "a: 1\n");
        write_file(&second, "site.yaml", "a: 2\n");

        let locator = ResourceLocator::with_roots(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);

        assert_eq!(locator.locate("site.yaml"), Some(in_first));
    }

    #[test]
    fn test_locate_falls_through_to_later_root() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let in_second = write_file(&second, "defaults.yaml", "a: 2\n");

        let locator = ResourceLocator::with_roots(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);

        assert_eq!(locator.locate("defaults.yaml"), Some(in_second));
    }

    #[test]
    fn test_locate_strips_leading_separator_for_roots() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "site.yaml", "a: 1\n");
        let locator = ResourceLocator::with_roots(vec![dir.path().to_path_buf()]);

        assert_eq!(locator.locate("/site.yaml"), Some(path));
    }

    #[test]
    fn test_locate_rejects_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();
        let locator = ResourceLocator::with_roots(vec![dir.path().to_path_buf()]);

        assert_eq!(locator.locate("subdir"), None);
    }
}
