// SPDX-License-Identifier: MIT OR Apache-2.0

//! The tagsync configuration resolver.
//!
//! Construction loads the layered settings files in fixed precedence order —
//! the shared site environment, the packaged defaults, then the site
//! overrides — merges them into one settings map and applies
//! process-environment overrides to the keys that came out of the merge. The
//! resulting resolver is read-only: every setting the daemon consumes is
//! exposed through a typed accessor that never fails, substituting the
//! documented default instead.

use crate::adapters::{
    EnvOverride, HostPrincipalFormatter, KeyfileCredentialReader, ResourceLocator,
    YamlSettingsFile,
};
use crate::domain::SettingsMap;
use crate::ports::{CredentialReader, PrincipalFormatter, SettingsSource};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Base site-environment settings shared with the wider cluster.
const CORE_SITE_FILE: &str = "core-site.yaml";
/// Packaged defaults shipped with the daemon.
const DEFAULT_CONFIG_FILE: &str = "ranger-tagsync-default.yaml";
/// Site-specific overrides written at install time.
const CONFIG_FILE: &str = "ranger-tagsync-site.yaml";

/// Master toggle for the sync process.
pub const TAGSYNC_ENABLED_PROP: &str = "ranger.tagsync.enabled";
/// Session-cookie toggle for tag-admin requests.
pub const TAGSYNC_RANGER_COOKIE_ENABLED_PROP: &str = "ranger.tagsync.cookie.enabled";
/// Directory the daemon writes its logs to.
pub const TAGSYNC_LOGDIR_PROP: &str = "ranger.tagsync.logdir";
/// Path of the file-based tag source.
pub const TAGSYNC_FILESOURCE_FILENAME_PROP: &str = "ranger.tagsync.source.file.filename";
/// Pre-formatted Kerberos identity for the sync user.
pub const TAGSYNC_KERBEROS_IDENTITY_PROP: &str = "tagsync.kerberos.identity";

const TAGSYNC_TAGADMIN_REST_URL_PROP: &str = "ranger.tagsync.dest.ranger.endpoint";
const TAGSYNC_TAGADMIN_REST_SSL_CONFIG_FILE_PROP: &str =
    "ranger.tagsync.dest.ranger.ssl.config.filename";
const TAGSYNC_SINK_CLASS_PROP: &str = "ranger.tagsync.dest.ranger.impl.class";
const TAGSYNC_TAGADMIN_USERNAME_PROP: &str = "ranger.tagsync.dest.ranger.username";
const TAGSYNC_TAGADMIN_PASSWORD_PROP: &str = "ranger.tagsync.dest.ranger.password";
const TAGSYNC_TAGADMIN_KEYSTORE_PROP: &str = "ranger.tagsync.keystore.filename";
const TAGSYNC_TAGADMIN_CONNECTION_CHECK_INTERVAL_PROP: &str =
    "ranger.tagsync.dest.ranger.connection.check.interval";

const TAGSYNC_ATLASSOURCE_ENDPOINT_PROP: &str = "ranger.tagsync.source.atlasrest.endpoint";
const TAGSYNC_ATLASREST_USERNAME_PROP: &str = "ranger.tagsync.source.atlasrest.username";
const TAGSYNC_ATLASREST_PASSWORD_PROP: &str = "ranger.tagsync.source.atlasrest.password";
const TAGSYNC_ATLASREST_KEYSTORE_PROP: &str = "ranger.tagsync.source.atlasrest.keystore.filename";
const TAGSYNC_ATLAS_REST_SSL_CONFIG_FILE_PROP: &str =
    "ranger.tagsync.source.atlasrest.ssl.config.filename";
const TAGSYNC_ATLAS_REST_SOURCE_DOWNLOAD_INTERVAL_PROP: &str =
    "ranger.tagsync.source.atlasrest.download.interval.millis";
const TAGSYNC_SOURCE_ATLAS_CUSTOM_RESOURCE_MAPPERS_PROP: &str =
    "ranger.tagsync.atlas.custom.resource.mappers";

const TAGSYNC_FILESOURCE_MOD_TIME_CHECK_INTERVAL_PROP: &str =
    "ranger.tagsync.source.file.check.interval.millis";
const TAGSYNC_SOURCE_RETRY_INITIALIZATION_INTERVAL_PROP: &str =
    "ranger.tagsync.source.retry.initialization.interval.millis";

const AUTH_TYPE_PROP: &str = "hadoop.security.authentication";
const NAME_RULES_PROP: &str = "hadoop.security.auth_to_local";
const TAGSYNC_KERBEROS_PRINCIPAL_PROP: &str = "ranger.tagsync.kerberos.principal";
const TAGSYNC_KERBEROS_KEYTAB_PROP: &str = "ranger.tagsync.kerberos.keytab";

/// Credential-store alias for the tag-admin account.
const TAGSYNC_DEST_RANGER_PASSWORD_ALIAS: &str = "tagadmin.user.password";
/// Credential-store alias for the metadata-source account.
const TAGSYNC_SOURCE_ATLASREST_PASSWORD_ALIAS: &str = "atlas.user.password";

/// A store secret equal to this sentinel means "no credential configured".
const KEYSTORE_NONE_SENTINEL: &str = "none";

const DEFAULT_TAGADMIN_USERNAME: &str = "rangertagsync";
const DEFAULT_ATLASREST_USERNAME: &str = "admin";
const DEFAULT_ATLASREST_PASSWORD: &str = "admin";

const DEFAULT_TAGADMIN_CONNECTION_CHECK_INTERVAL: Duration = Duration::from_millis(15_000);
const DEFAULT_ATLASREST_SOURCE_DOWNLOAD_INTERVAL: Duration = Duration::from_millis(900_000);
const DEFAULT_FILESOURCE_MOD_TIME_CHECK_INTERVAL: Duration = Duration::from_millis(60_000);
const DEFAULT_SOURCE_RETRY_INITIALIZATION_INTERVAL: Duration = Duration::from_millis(10_000);

/// Registry path of the bundled tag-admin REST sink, selected by the
/// `"ranger"` shorthand.
const RANGER_REST_SINK_CLASS: &str = "tagsync::sink::tagadmin::TagAdminRestSink";

/// The daemon's configuration, resolved once at startup.
///
/// Built through [`TagSyncConfig::builder`]; read-only afterwards. The
/// settings map behind the accessors is the merge of the layered settings
/// files plus the environment override pass — accessors never go back to the
/// sources.
///
/// # Examples
///
/// ```rust,no_run
/// use tagsync_config::service::TagSyncConfig;
///
/// let config = TagSyncConfig::builder().build();
/// if config.is_enabled() {
///     println!("syncing to {:?}", config.tag_admin_rest_url());
/// }
/// ```
pub struct TagSyncConfig {
    settings: SettingsMap,
    local_hostname: String,
    credential_reader: Box<dyn CredentialReader>,
    principal_formatter: Box<dyn PrincipalFormatter>,
}

impl TagSyncConfig {
    /// Creates a builder with production defaults: the three layered YAML
    /// files, the process environment for overrides, the keyfile credential
    /// reader and `_HOST` principal expansion.
    pub fn builder() -> TagSyncConfigBuilder {
        TagSyncConfigBuilder::new()
    }

    /// Whether the sync process is enabled at all. Defaults to enabled.
    pub fn is_enabled(&self) -> bool {
        self.settings.get_flag(TAGSYNC_ENABLED_PROP, true)
    }

    /// Whether tag-admin requests reuse a session cookie. Defaults to enabled.
    pub fn is_cookie_enabled(&self) -> bool {
        self.settings.get_flag(TAGSYNC_RANGER_COOKIE_ENABLED_PROP, true)
    }

    /// The daemon's log directory, when configured.
    pub fn log_dir(&self) -> Option<&str> {
        self.settings.get(TAGSYNC_LOGDIR_PROP)
    }

    /// The sink implementation the daemon should instantiate.
    ///
    /// The shorthand `"ranger"` (any casing) selects the bundled tag-admin
    /// REST sink; any other value is handed back verbatim for the sink
    /// registry to resolve.
    pub fn sink_class(&self) -> Option<String> {
        self.settings.get(TAGSYNC_SINK_CLASS_PROP).map(|value| {
            if value.eq_ignore_ascii_case("ranger") {
                RANGER_REST_SINK_CLASS.to_string()
            } else {
                value.to_string()
            }
        })
    }

    /// Endpoint of the tag-admin REST service, when configured.
    pub fn tag_admin_rest_url(&self) -> Option<&str> {
        self.settings.get(TAGSYNC_TAGADMIN_REST_URL_PROP)
    }

    /// SSL client configuration file for the tag-admin endpoint.
    pub fn tag_admin_rest_ssl_config_file(&self) -> Option<&str> {
        self.settings.get(TAGSYNC_TAGADMIN_REST_SSL_CONFIG_FILE_PROP)
    }

    /// Username for the tag-admin account, `"rangertagsync"` unless a
    /// non-blank value is configured.
    pub fn tag_admin_username(&self) -> String {
        match self.settings.get_non_blank(TAGSYNC_TAGADMIN_USERNAME_PROP) {
            Some(value) => value.to_string(),
            None => DEFAULT_TAGADMIN_USERNAME.to_string(),
        }
    }

    /// Password for the tag-admin account.
    ///
    /// A non-empty inline password wins. Otherwise the credential store named
    /// by the keystore setting is consulted under the fixed tag-admin alias;
    /// the store's answer only counts when it is non-blank and not the
    /// `"none"` sentinel. `None` when neither source yields a usable secret —
    /// store failures included.
    pub fn tag_admin_password(&self) -> Option<String> {
        self.lookup_credential(
            TAGSYNC_TAGADMIN_PASSWORD_PROP,
            TAGSYNC_TAGADMIN_KEYSTORE_PROP,
            TAGSYNC_DEST_RANGER_PASSWORD_ALIAS,
        )
        .resolved
    }

    /// How often the tag-admin connection is probed.
    pub fn tag_admin_connection_check_interval(&self) -> Duration {
        self.settings.get_millis_or(
            TAGSYNC_TAGADMIN_CONNECTION_CHECK_INTERVAL_PROP,
            DEFAULT_TAGADMIN_CONNECTION_CHECK_INTERVAL,
        )
    }

    /// Endpoint of the metadata-source REST service, when configured.
    pub fn atlas_rest_endpoint(&self) -> Option<&str> {
        self.settings.get(TAGSYNC_ATLASSOURCE_ENDPOINT_PROP)
    }

    /// Username for the metadata-source account, `"admin"` unless a
    /// non-blank value is configured.
    pub fn atlas_rest_username(&self) -> String {
        match self.settings.get_non_blank(TAGSYNC_ATLASREST_USERNAME_PROP) {
            Some(value) => value.to_string(),
            None => DEFAULT_ATLASREST_USERNAME.to_string(),
        }
    }

    /// Password for the metadata-source account.
    ///
    /// Same two-step policy as [`TagSyncConfig::tag_admin_password`], with
    /// one difference: when both steps come up with nothing at all, the
    /// built-in default account password is returned instead of `None`. A
    /// non-blank candidate that was rejected (the `"none"` sentinel) still
    /// yields `None`.
    pub fn atlas_rest_password(&self) -> Option<String> {
        let lookup = self.lookup_credential(
            TAGSYNC_ATLASREST_PASSWORD_PROP,
            TAGSYNC_ATLASREST_KEYSTORE_PROP,
            TAGSYNC_SOURCE_ATLASREST_PASSWORD_ALIAS,
        );
        if lookup.resolved.is_some() {
            return lookup.resolved;
        }
        match lookup.candidate {
            Some(candidate) if !candidate.trim().is_empty() => None,
            _ => Some(DEFAULT_ATLASREST_PASSWORD.to_string()),
        }
    }

    /// SSL client configuration file for the metadata-source endpoint.
    pub fn atlas_rest_ssl_config_file(&self) -> Option<&str> {
        self.settings.get(TAGSYNC_ATLAS_REST_SSL_CONFIG_FILE_PROP)
    }

    /// How often tags are downloaded from the metadata source.
    pub fn atlas_download_interval(&self) -> Duration {
        self.settings.get_millis_or(
            TAGSYNC_ATLAS_REST_SOURCE_DOWNLOAD_INTERVAL_PROP,
            DEFAULT_ATLASREST_SOURCE_DOWNLOAD_INTERVAL,
        )
    }

    /// Comma-separated list of custom resource mappers, when configured.
    pub fn custom_resource_mappers(&self) -> Option<&str> {
        self.settings
            .get(TAGSYNC_SOURCE_ATLAS_CUSTOM_RESOURCE_MAPPERS_PROP)
    }

    /// Path of the file-based tag source, when configured.
    pub fn source_file_name(&self) -> Option<&str> {
        self.settings.get(TAGSYNC_FILESOURCE_FILENAME_PROP)
    }

    /// How often the file-based tag source is checked for modification.
    pub fn source_file_mod_check_interval(&self) -> Duration {
        self.settings.get_millis_or(
            TAGSYNC_FILESOURCE_MOD_TIME_CHECK_INTERVAL_PROP,
            DEFAULT_FILESOURCE_MOD_TIME_CHECK_INTERVAL,
        )
    }

    /// How long to wait before retrying a failed source initialization.
    pub fn source_retry_initialization_interval(&self) -> Duration {
        self.settings.get_millis_or(
            TAGSYNC_SOURCE_RETRY_INITIALIZATION_INTERVAL_PROP,
            DEFAULT_SOURCE_RETRY_INITIALIZATION_INTERVAL,
        )
    }

    /// The cluster authentication mode, `"simple"` unless configured.
    pub fn authentication_type(&self) -> &str {
        self.settings.get_or(AUTH_TYPE_PROP, "simple")
    }

    /// Auth-to-local name mapping rules, `"DEFAULT"` unless configured.
    pub fn name_rules(&self) -> &str {
        self.settings.get_or(NAME_RULES_PROP, "DEFAULT")
    }

    /// The Kerberos principal for this host, expanded from the configured
    /// pattern (or the empty string) and the local hostname. `None` when
    /// expansion fails.
    pub fn kerberos_principal(&self) -> Option<String> {
        let raw = self.settings.get_or(TAGSYNC_KERBEROS_PRINCIPAL_PROP, "");
        match self.principal_formatter.format(raw, &self.local_hostname) {
            Ok(principal) => Some(principal),
            Err(err) => {
                tracing::debug!(%err, "could not expand kerberos principal");
                None
            }
        }
    }

    /// Path to the Kerberos keytab, empty when not configured.
    pub fn kerberos_keytab(&self) -> &str {
        self.settings.get_or(TAGSYNC_KERBEROS_KEYTAB_PROP, "")
    }

    /// Pre-formatted Kerberos identity for the sync user, when configured.
    pub fn kerberos_identity(&self) -> Option<&str> {
        self.settings.get(TAGSYNC_KERBEROS_IDENTITY_PROP)
    }

    /// The canonical local hostname resolved at construction time.
    pub fn local_hostname(&self) -> &str {
        &self.local_hostname
    }

    /// Two-step credential lookup shared by both password accessors.
    ///
    /// `candidate` carries the last value seen when nothing was resolved,
    /// because the source-password accessor's final fallback distinguishes
    /// "everything was blank or missing" from "a candidate existed but was
    /// rejected".
    fn lookup_credential(
        &self,
        password_key: &str,
        keystore_key: &str,
        alias: &str,
    ) -> CredentialLookup {
        let mut candidate: Option<String> = None;

        if let Some(inline) = self.settings.get(password_key) {
            if !inline.is_empty() {
                return CredentialLookup {
                    resolved: Some(inline.to_string()),
                    candidate: None,
                };
            }
            candidate = Some(inline.to_string());
        }

        if let Some(store) = self.settings.get(keystore_key) {
            let store = store.trim();
            if !store.is_empty() {
                match self.credential_reader.read(Path::new(store), alias) {
                    Ok(secret) => {
                        let trimmed = secret.trim();
                        if !trimmed.is_empty()
                            && !trimmed.eq_ignore_ascii_case(KEYSTORE_NONE_SENTINEL)
                        {
                            return CredentialLookup {
                                resolved: Some(secret),
                                candidate: None,
                            };
                        }
                        candidate = Some(secret);
                    }
                    Err(err) => {
                        tracing::debug!(
                            alias,
                            reader = self.credential_reader.name(),
                            %err,
                            "credential store lookup failed"
                        );
                        candidate = None;
                    }
                }
            }
        }

        CredentialLookup {
            resolved: None,
            candidate,
        }
    }
}

impl fmt::Debug for TagSyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagSyncConfig")
            .field("num_settings", &self.settings.len())
            .field("local_hostname", &self.local_hostname)
            .finish_non_exhaustive()
    }
}

/// Result of the two-step credential lookup.
struct CredentialLookup {
    /// The usable secret, when one of the two steps produced one.
    resolved: Option<String>,
    /// Last candidate seen when nothing was resolved.
    candidate: Option<String>,
}

/// Builder for [`TagSyncConfig`].
///
/// Every collaborator can be replaced: the settings sources, the override
/// lookup, the credential reader, the principal formatter and the hostname.
/// The defaults mirror a production deployment.
pub struct TagSyncConfigBuilder {
    sources: Vec<Box<dyn SettingsSource>>,
    locator: ResourceLocator,
    overrides: EnvOverride,
    credential_reader: Box<dyn CredentialReader>,
    principal_formatter: Box<dyn PrincipalFormatter>,
    hostname: Option<String>,
}

impl TagSyncConfigBuilder {
    /// Creates a builder with production defaults.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            locator: ResourceLocator::new(),
            overrides: EnvOverride::new(),
            credential_reader: Box::new(KeyfileCredentialReader::new()),
            principal_formatter: Box::new(HostPrincipalFormatter::new()),
            hostname: None,
        }
    }

    /// Replaces the locator used to discover the default settings files.
    pub fn with_locator(mut self, locator: ResourceLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Appends a settings source; sources are merged in the order added.
    ///
    /// Adding any source replaces the default three-file layering entirely.
    pub fn with_source(mut self, source: Box<dyn SettingsSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Replaces the override lookup applied after the merge.
    pub fn with_overrides(mut self, overrides: EnvOverride) -> Self {
        self.overrides = overrides;
        self
    }

    /// Replaces the credential store reader.
    pub fn with_credential_reader(mut self, reader: Box<dyn CredentialReader>) -> Self {
        self.credential_reader = reader;
        self
    }

    /// Replaces the Kerberos principal formatter.
    pub fn with_principal_formatter(mut self, formatter: Box<dyn PrincipalFormatter>) -> Self {
        self.principal_formatter = formatter;
        self
    }

    /// Fixes the local hostname instead of resolving it from the system.
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Loads, merges and freezes the settings.
    ///
    /// Construction is best-effort: a source that cannot be found or read is
    /// logged and skipped, and the resolver is still produced. The override
    /// pass runs after the merge and only touches keys the merge produced.
    pub fn build(self) -> TagSyncConfig {
        let sources = if self.sources.is_empty() {
            default_sources(&self.locator)
        } else {
            self.sources
        };

        let mut settings = SettingsMap::new();
        for source in &sources {
            match source.load() {
                Ok(values) => {
                    tracing::info!(
                        source = source.name(),
                        keys = values.len(),
                        "merged settings source"
                    );
                    settings.merge(values);
                }
                Err(err) => {
                    tracing::warn!(source = source.name(), %err, "skipping settings source");
                }
            }
        }
        settings.apply_overrides(|key| self.overrides.get(key));

        let local_hostname = self.hostname.unwrap_or_else(local_hostname);

        TagSyncConfig {
            settings,
            local_hostname,
            credential_reader: self.credential_reader,
            principal_formatter: self.principal_formatter,
        }
    }
}

impl Default for TagSyncConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The production three-file layering, in precedence order.
fn default_sources(locator: &ResourceLocator) -> Vec<Box<dyn SettingsSource>> {
    vec![
        Box::new(YamlSettingsFile::new(CORE_SITE_FILE, locator.clone())),
        Box::new(YamlSettingsFile::new(DEFAULT_CONFIG_FILE, locator.clone())),
        Box::new(YamlSettingsFile::new(CONFIG_FILE, locator.clone())),
    ]
}

fn local_hostname() -> String {
    let name = gethostname::gethostname();
    let name = name.to_string_lossy();
    if name.is_empty() {
        "unknown".to_string()
    } else {
        name.to_string()
    }
}
