// crates/netmgr-config/src/config.rs
// ============================================================================
// Module: Netmgr Configuration
// Description: Configuration loading and validation for the netmgr CLI.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, toml, url
// ============================================================================

//! ## Overview
//! Configuration is read from a TOML file resolved from an explicit path, the
//! `NETMGR_CONFIG` environment variable, or `netmgr.toml` in the working
//! directory. Only the implicit default may be absent; explicit paths must
//! exist. Unknown keys and out-of-range values are rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "netmgr.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "NETMGR_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default signing region (Network Manager home region).
pub const DEFAULT_REGION: &str = "us-west-2";
/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Minimum request timeout in milliseconds.
pub const MIN_TIMEOUT_MS: u64 = 100;
/// Maximum request timeout in milliseconds.
pub const MAX_TIMEOUT_MS: u64 = 300_000;
/// Default maximum response size in bytes.
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 8 * 1024 * 1024;
/// Minimum allowed response size limit in bytes.
pub const MIN_MAX_RESPONSE_BYTES: usize = 1024;
/// Maximum allowed response size limit in bytes.
pub const MAX_MAX_RESPONSE_BYTES: usize = 64 * 1024 * 1024;
/// Maximum length of a region name.
const MAX_REGION_LENGTH: usize = 32;
/// Maximum length of a profile name.
const MAX_PROFILE_LENGTH: usize = 128;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Netmgr CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NetmgrConfig {
    /// Service client configuration.
    #[serde(default)]
    pub client: ClientConfig,
    /// Invocation audit configuration.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Service client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Signing region; falls back to the ambient AWS configuration, then the default.
    #[serde(default)]
    pub region: Option<String>,
    /// Endpoint override (http or https).
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Named AWS profile for credentials.
    #[serde(default)]
    pub profile: Option<String>,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Maximum response body size in bytes.
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: None,
            endpoint: None,
            profile: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }
}

impl ClientConfig {
    /// Validates client settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(region) = &self.region {
            validate_region(region)?;
        }
        if let Some(endpoint) = &self.endpoint {
            validate_endpoint(endpoint)?;
        }
        if let Some(profile) = &self.profile {
            let trimmed = profile.trim();
            if trimmed.is_empty() || trimmed.len() > MAX_PROFILE_LENGTH {
                return Err(ConfigError::Invalid(format!(
                    "client.profile must be 1..={MAX_PROFILE_LENGTH} characters"
                )));
            }
        }
        if !(MIN_TIMEOUT_MS ..= MAX_TIMEOUT_MS).contains(&self.timeout_ms) {
            return Err(ConfigError::Invalid(format!(
                "client.timeout_ms must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS}"
            )));
        }
        if !(MIN_MAX_RESPONSE_BYTES ..= MAX_MAX_RESPONSE_BYTES).contains(&self.max_response_bytes)
        {
            return Err(ConfigError::Invalid(format!(
                "client.max_response_bytes must be between {MIN_MAX_RESPONSE_BYTES} and \
                 {MAX_MAX_RESPONSE_BYTES}"
            )));
        }
        Ok(())
    }
}

/// Invocation audit configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Enables audit events.
    #[serde(default)]
    pub enabled: bool,
    /// Append-only JSON lines file; stderr when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AuditConfig {
    /// Validates audit settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("audit.path must not be empty".to_string()));
            }
            validate_path(path)?;
        }
        Ok(())
    }
}

/// Output rendering format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Canonical single-line JSON per object.
    #[default]
    Json,
    /// Indented JSON per object.
    Pretty,
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Command-line overrides applied on top of the file configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Region override.
    pub region: Option<String>,
    /// Endpoint override.
    pub endpoint: Option<String>,
    /// Profile override.
    pub profile: Option<String>,
    /// Timeout override in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Output format override.
    pub output: Option<OutputFormat>,
    /// Audit log path override; enables auditing.
    pub audit_log: Option<PathBuf>,
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl NetmgrConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// The implicit `netmgr.toml` may be absent, in which case defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an explicit file is missing, or when
    /// reading, parsing, or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, explicit) = resolve_path(path)?;
        validate_path(&resolved)?;
        if !explicit && !resolved.exists() {
            return Ok(Self::default());
        }
        let bytes = fs::read(&resolved)
            .map_err(|err| ConfigError::Io(format!("{}: {err}", resolved.display())))?;
        Self::from_bytes(&bytes)
    }

    /// Parses and validates configuration from raw file bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the content is oversized, not UTF-8, not
    /// valid TOML, or fails validation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.client.validate()?;
        self.audit.validate()?;
        Ok(())
    }

    /// Applies command-line overrides and re-validates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an override value is invalid.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) -> Result<(), ConfigError> {
        if let Some(region) = overrides.region {
            self.client.region = Some(region);
        }
        if let Some(endpoint) = overrides.endpoint {
            self.client.endpoint = Some(endpoint);
        }
        if let Some(profile) = overrides.profile {
            self.client.profile = Some(profile);
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.client.timeout_ms = timeout_ms;
        }
        if let Some(format) = overrides.output {
            self.output.format = format;
        }
        if let Some(path) = overrides.audit_log {
            self.audit.enabled = true;
            self.audit.path = Some(path);
        }
        self.validate()
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Default for [`ClientConfig::timeout_ms`].
const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Default for [`ClientConfig::max_response_bytes`].
const fn default_max_response_bytes() -> usize {
    DEFAULT_MAX_RESPONSE_BYTES
}

/// Resolves the config path from CLI or environment defaults.
///
/// Returns the path and whether it was named explicitly.
fn resolve_path(path: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), true));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR)
        && !env_path.trim().is_empty()
    {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), true));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), false))
}

/// Validates a path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a region name such as `us-west-2`.
fn validate_region(region: &str) -> Result<(), ConfigError> {
    let valid = !region.is_empty()
        && region.len() <= MAX_REGION_LENGTH
        && region.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        && !region.starts_with('-')
        && !region.ends_with('-');
    if valid {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("client.region {region:?} is not a valid region name")))
    }
}

/// Validates an endpoint override URL.
fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let url = Url::parse(endpoint)
        .map_err(|err| ConfigError::Invalid(format!("client.endpoint is not a url: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid("client.endpoint must use http or https".to_string()));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::Invalid("client.endpoint must include a host".to_string()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::Invalid(
            "client.endpoint must not include a query or fragment".to_string(),
        ));
    }
    Ok(())
}
