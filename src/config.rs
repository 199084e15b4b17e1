//! Configuration file support for nutriscan.
//!
//! Provides YAML-based configuration through `nutriscan.config.yml` files,
//! including data structures, file loading, validation and the final
//! merge with command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

use crate::adapters::outbound::network::{default_user_agent, DEFAULT_BASE_URL};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "nutriscan.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub discard_stale_results: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after applying CLI flags, config file and built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub user_agent: String,
    pub discard_stale_results: bool,
}

impl Settings {
    /// Precedence: CLI flag > config file > built-in constant.
    pub fn resolve(
        cli_base_url: Option<String>,
        cli_discard_stale: bool,
        config: Option<ConfigFile>,
    ) -> Self {
        let config = config.unwrap_or_default();

        Self {
            base_url: cli_base_url
                .or(config.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            user_agent: config.user_agent.unwrap_or_else(default_user_agent),
            discard_stale_results: cli_discard_stale
                || config.discard_stale_results.unwrap_or(false),
        }
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

/// Checks that a base URL is usable for the product API.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    if base_url.trim().is_empty() {
        bail!(
            "Invalid base URL: must not be empty.\n\n\
             💡 Hint: Remove the field to use {} or set a full URL.",
            DEFAULT_BASE_URL
        );
    }
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        bail!(
            "Invalid base URL '{}': must start with http:// or https://",
            base_url
        );
    }
    Ok(())
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref base_url) = config.base_url {
        validate_base_url(base_url)?;
    }

    if let Some(ref user_agent) = config.user_agent {
        if user_agent.trim().is_empty() {
            bail!(
                "Invalid config: user_agent must not be empty.\n\n\
                 💡 Hint: Open Food Facts asks clients to identify themselves, e.g. \"MyApp - Linux - Version 1.0\"."
            );
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = %key, "unknown config field will be ignored");
    }
}
