// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the production load path: real YAML files discovered
//! through the locator and merged by the builder's default three-file
//! layering.

use std::fs;
use std::time::Duration;
use tempfile::TempDir;
use tagsync_config::adapters::ResourceLocator;
use tagsync_config::service::TagSyncConfig;

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

#[test]
fn test_default_layering_from_real_files() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "core-site.yaml",
        "hadoop:\n  security:\n    authentication: kerberos\n",
    );
    write(
        &dir,
        "ranger-tagsync-default.yaml",
        concat!(
            "ranger:\n",
            "  tagsync:\n",
            "    logdir: /var/log/tagsync\n",
            "    source:\n",
            "      atlasrest:\n",
            "        download:\n",
            "          interval:\n",
            "            millis: 900000\n",
        ),
    );
    write(
        &dir,
        "ranger-tagsync-site.yaml",
        concat!(
            "ranger:\n",
            "  tagsync:\n",
            "    logdir: /opt/site/log\n",
            "    dest:\n",
            "      ranger:\n",
            "        endpoint: https://admin.example.com:6182\n",
        ),
    );

    let locator = ResourceLocator::with_roots(vec![dir.path().to_path_buf()]);
    let config = TagSyncConfig::builder()
        .with_locator(locator)
        .with_hostname("host1")
        .build();

    // Site file overrides the packaged default; non-colliding keys survive
    assert_eq!(config.log_dir(), Some("/opt/site/log"));
    assert_eq!(config.authentication_type(), "kerberos");
    assert_eq!(
        config.tag_admin_rest_url(),
        Some("https://admin.example.com:6182")
    );
    assert_eq!(
        config.atlas_download_interval(),
        Duration::from_millis(900_000)
    );
}

#[test]
fn test_missing_layers_are_skipped() {
    let dir = TempDir::new().unwrap();
    // Only the site file exists; core-site and defaults are absent
    write(
        &dir,
        "ranger-tagsync-site.yaml",
        "ranger:\n  tagsync:\n    enabled: false\n",
    );

    let locator = ResourceLocator::with_roots(vec![dir.path().to_path_buf()]);
    let config = TagSyncConfig::builder()
        .with_locator(locator)
        .with_hostname("host1")
        .build();

    assert!(!config.is_enabled());
    assert_eq!(config.log_dir(), None);
}

#[test]
fn test_no_files_at_all_yields_pure_defaults() {
    let dir = TempDir::new().unwrap();
    let locator = ResourceLocator::with_roots(vec![dir.path().to_path_buf()]);
    let config = TagSyncConfig::builder()
        .with_locator(locator)
        .with_hostname("host1")
        .build();

    assert!(config.is_enabled());
    assert_eq!(config.authentication_type(), "simple");
    assert_eq!(config.name_rules(), "DEFAULT");
    assert_eq!(config.tag_admin_username(), "rangertagsync");
    assert_eq!(config.atlas_rest_username(), "admin");
    assert_eq!(config.atlas_rest_password().as_deref(), Some("admin"));
    assert_eq!(config.tag_admin_password(), None);
}

#[test]
fn test_file_found_in_later_root() {
    let empty = TempDir::new().unwrap();
    let populated = TempDir::new().unwrap();
    write(
        &populated,
        "ranger-tagsync-site.yaml",
        "ranger:\n  tagsync:\n    logdir: /found/late\n",
    );

    let locator = ResourceLocator::with_roots(vec![
        empty.path().to_path_buf(),
        populated.path().to_path_buf(),
    ]);
    let config = TagSyncConfig::builder()
        .with_locator(locator)
        .with_hostname("host1")
        .build();

    assert_eq!(config.log_dir(), Some("/found/late"));
}

#[test]
fn test_unparsable_layer_is_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    write(&dir, "ranger-tagsync-default.yaml", "key: [unclosed");
    write(
        &dir,
        "ranger-tagsync-site.yaml",
        "ranger:\n  tagsync:\n    logdir: /still/loaded\n",
    );

    let locator = ResourceLocator::with_roots(vec![dir.path().to_path_buf()]);
    let config = TagSyncConfig::builder()
        .with_locator(locator)
        .with_hostname("host1")
        .build();

    assert_eq!(config.log_dir(), Some("/still/loaded"));
}
