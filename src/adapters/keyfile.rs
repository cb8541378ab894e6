// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyfile-backed credential reader.
//!
//! Deployments that do not run a full credential store can keep secrets in a
//! root-readable YAML keyfile mapping aliases to secrets. An alias is a
//! dotted path into the document, so the `tagadmin.user.password` alias reads
//! the file:
//!
//! ```yaml
//! tagadmin:
//!   user:
//!     password: s3cret
//! ```

use crate::adapters::YamlParser;
use crate::domain::{ConfigError, Result};
use crate::ports::{CredentialReader, SettingsParser};
use std::fs;
use std::path::Path;

/// Reads secrets from a YAML keyfile addressed by `(path, alias)`.
#[derive(Debug, Clone, Default)]
pub struct KeyfileCredentialReader {
    parser: YamlParser,
}

impl KeyfileCredentialReader {
    /// Creates a new keyfile reader.
    pub fn new() -> Self {
        Self {
            parser: YamlParser::new(),
        }
    }

    fn credential_error(store_path: &Path, alias: &str, message: String) -> ConfigError {
        ConfigError::CredentialError {
            store: store_path.display().to_string(),
            alias: alias.to_string(),
            message,
        }
    }
}

impl CredentialReader for KeyfileCredentialReader {
    fn name(&self) -> &str {
        "keyfile"
    }

    fn read(&self, store_path: &Path, alias: &str) -> Result<String> {
        let content = fs::read_to_string(store_path).map_err(|e| {
            Self::credential_error(store_path, alias, format!("cannot read keyfile: {}", e))
        })?;

        let entries = self.parser.parse(&content).map_err(|e| {
            Self::credential_error(store_path, alias, format!("cannot parse keyfile: {}", e))
        })?;

        entries.get(alias).cloned().ok_or_else(|| {
            Self::credential_error(store_path, alias, "alias not present in keyfile".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn keyfile(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_known_alias() {
        let file = keyfile("tagadmin:\n  user:\n    password: s3cret\n");
        let reader = KeyfileCredentialReader::new();

        let secret = reader.read(file.path(), "tagadmin.user.password").unwrap();
        assert_eq!(secret, "s3cret");
    }

    #[test]
    fn test_read_unknown_alias() {
        let file = keyfile("tagadmin:\n  user:\n    password: s3cret\n");
        let reader = KeyfileCredentialReader::new();

        let result = reader.read(file.path(), "atlas.user.password");
        assert!(matches!(result, Err(ConfigError::CredentialError { .. })));
    }

    #[test]
    fn test_read_missing_file() {
        let reader = KeyfileCredentialReader::new();
        let result = reader.read(Path::new("/no/such/keyfile.yaml"), "any.alias");
        assert!(matches!(result, Err(ConfigError::CredentialError { .. })));
    }

    #[test]
    fn test_read_unparsable_file() {
        let file = keyfile("key: [unclosed");
        let reader = KeyfileCredentialReader::new();

        let result = reader.read(file.path(), "key");
        assert!(matches!(result, Err(ConfigError::CredentialError { .. })));
    }
}
