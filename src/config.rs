//! Site configuration loading
//!
//! The binary reads an optional TOML file carrying the values that seed the
//! root of the rule tree (site title, output directory). Everything here is
//! caller-side: the engine itself only ever sees the resulting environment.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings applied at the root of the demo site build
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Site title, installed under the title key
    pub title: String,
    /// Output directory, unless overridden on the command line
    pub output_directory: PathBuf,
}

/// TOML structure for deserializing configs
#[derive(Deserialize)]
struct TomlConfig {
    site: Option<TomlSite>,
}

#[derive(Deserialize)]
struct TomlSite {
    title: Option<String>,
    output: Option<PathBuf>,
}

impl SiteConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let defaults = Self::default();
        let site = parsed.site;

        Ok(SiteConfig {
            title: site
                .as_ref()
                .and_then(|s| s.title.clone())
                .unwrap_or(defaults.title),
            output_directory: site
                .and_then(|s| s.output)
                .unwrap_or(defaults.output_directory),
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            output_directory: PathBuf::from("out"),
        }
    }
}
