//! Configuration file support for sbom-test-app.
//!
//! Provides YAML-based configuration through `sbom-test-app.config.yml`
//! files, including data structures, file loading, validation and merging
//! with command-line overrides.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::compression::DEFAULT_COMPRESSION_LEVEL;
use crate::adapters::outbound::network::DEFAULT_HTTP_TIMEOUT_SECS;
use crate::application::dto::DEFAULT_INPUT;
use crate::shared::error::AppError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-test-app.config.yml";

const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub input: Option<String>,
    pub compression_level: Option<u32>,
    pub http_timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after merging defaults, config file and CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: String,
    pub compression_level: u32,
    pub http_timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub input: Option<String>,
    pub compression_level: Option<u32>,
}

impl Settings {
    /// Merge precedence: CLI > config file > defaults.
    pub fn resolve(config: Option<ConfigFile>, overrides: CliOverrides) -> Result<Self> {
        let config = config.unwrap_or_default();
        let defaults = Settings::default();

        let compression_level = overrides
            .compression_level
            .or(config.compression_level)
            .unwrap_or(defaults.compression_level);
        validate_compression_level(compression_level)?;

        Ok(Self {
            input: overrides.input.or(config.input).unwrap_or(defaults.input),
            compression_level,
            http_timeout: config
                .http_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
            user_agent: config.user_agent,
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_compression_level(level: u32) -> Result<()> {
    if level > MAX_COMPRESSION_LEVEL {
        return Err(invalid(format!(
            "compression_level must be between 0 and {}, got {}.\n\n\
             💡 Hint: 0 stores data uncompressed, 9 compresses hardest.",
            MAX_COMPRESSION_LEVEL, level
        )));
    }
    Ok(())
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(level) = config.compression_level {
        validate_compression_level(level)?;
    }

    if config.http_timeout_secs == Some(0) {
        return Err(invalid(format!(
            "http_timeout_secs must be greater than 0.\n\n\
             💡 Hint: Omit the field to use the default of {} seconds.",
            DEFAULT_HTTP_TIMEOUT_SECS
        )));
    }

    if let Some(ref user_agent) = config.user_agent {
        if user_agent.trim().is_empty() {
            return Err(invalid(
                "user_agent must not be empty.\n\n\
                 💡 Hint: Omit the field to use the default user agent."
                    .to_string(),
            ));
        }
    }

    Ok(())
}

fn invalid(message: String) -> anyhow::Error {
    AppError::Validation { message }.into()
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        log::warn!("Unknown config field '{}' will be ignored.", key);
    }
}
