//! Optional TOML configuration
//!
//! Settings live under an `[extract]` section:
//!
//! ```toml
//! [extract]
//! enum_name = "TextureFormat"
//! strategy = "structural"
//! format = "lines"
//! raw = false
//! ```
//!
//! Command-line flags win over the file; the file wins over built-in
//! defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{ExtractOptions, Normalization, OutputFormat, Strategy};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = ".enumgrab.toml";

/// Contents of the `[extract]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    #[serde(default)]
    pub enum_name: Option<String>,

    #[serde(default)]
    pub strategy: Option<Strategy>,

    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Keep trailing commas on entries
    #[serde(default)]
    pub raw: Option<bool>,
}

/// Per-invocation overrides taken from command-line flags
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub enum_name: Option<String>,
    pub strategy: Option<Strategy>,
    pub format: Option<OutputFormat>,
    pub raw: bool,
    pub pretty: bool,
}

/// Load the `[extract]` section.
///
/// An explicit path must exist. Without one, `.enumgrab.toml` in `dir` is
/// used if present, and defaults otherwise.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ExtractConfig> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = dir.join(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                log::debug!("No {} found, using default config", DEFAULT_CONFIG_FILE);
                return Ok(ExtractConfig::default());
            }
            path
        }
    };

    let config_str = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config {}", config_path.display()))?;

    parse_config(&config_str)
        .with_context(|| format!("Failed to parse config {}", config_path.display()))
}

/// Parse config text and pull out the `[extract]` section
pub fn parse_config(config_str: &str) -> Result<ExtractConfig> {
    let toml_value: toml::Value = toml::from_str(config_str)
        .context("Invalid TOML")?;

    if let Some(extract_table) = toml_value.get("extract") {
        let config: ExtractConfig = extract_table.clone().try_into()
            .context("Failed to parse [extract] section")?;
        Ok(config)
    } else {
        log::debug!("No [extract] section in config, using defaults");
        Ok(ExtractConfig::default())
    }
}

impl ExtractConfig {
    /// Merge with command-line overrides into the options for one run
    pub fn resolve(self, overrides: Overrides) -> ExtractOptions {
        let defaults = ExtractOptions::default();
        let raw = overrides.raw || self.raw.unwrap_or(false);

        ExtractOptions {
            enum_name: overrides.enum_name.or(self.enum_name).unwrap_or(defaults.enum_name),
            strategy: overrides.strategy.or(self.strategy).unwrap_or(defaults.strategy),
            format: overrides.format.or(self.format).unwrap_or(defaults.format),
            normalization: if raw { Normalization::Raw } else { Normalization::TrimSeparators },
            pretty: overrides.pretty,
        }
    }
}
