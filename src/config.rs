//! Configuration file support for cargo-depgraph.
//!
//! Provides YAML-based configuration through `cargo-depgraph.config.yml`
//! files, including data structures, file loading, and validation.
//! Values given on the command line always win over the file.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::error::DepGraphError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "cargo-depgraph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub registry_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_depth: Option<usize>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, if any. Validated at load time.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| {
                OutputFormat::from_str(format)
                    .map_err(|message| DepGraphError::InvalidConfig { message }.into())
            })
            .transpose()
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

fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.timeout_secs == Some(0) {
        return Err(invalid("timeout_secs must be greater than 0"));
    }

    if let Some(ref url) = config.registry_url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(invalid(&format!(
                "registry_url must start with http:// or https:// (got {:?})",
                url
            )));
        }
    }

    config.output_format()?;
    Ok(())
}

fn invalid(message: &str) -> anyhow::Error {
    DepGraphError::InvalidConfig {
        message: message.to_string(),
    }
    .into()
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
