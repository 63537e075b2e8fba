//! Configuration schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Names accepted for `formatter.name`.
pub const FORMATTER_NAMES: &[&str] = &["plantuml", "mermaid"];

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Branch whose history is drawn when none is given.
    #[serde(default = "default_branch")]
    pub default_branch: String,

    /// Formatter configuration.
    #[serde(default)]
    pub formatter: FormatterPluginConfig,

    /// Image renderer configuration.
    #[serde(default)]
    pub renderer: RendererConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_branch: default_branch(),
            formatter: FormatterPluginConfig::default(),
            renderer: RendererConfig::default(),
        }
    }
}

impl Config {
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_branch.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_branch must not be empty".to_string(),
            ));
        }

        if self.formatter.short_id_len == 0 {
            return Err(ConfigError::Invalid(
                "formatter.short_id_len must be at least 1".to_string(),
            ));
        }

        if !FORMATTER_NAMES.contains(&self.formatter.name.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown formatter {:?}, expected one of: {}",
                self.formatter.name,
                FORMATTER_NAMES.join(", ")
            )));
        }

        Ok(())
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the value cannot be serialized.
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

fn default_branch() -> String {
    "main".to_string()
}

/// Formatter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterPluginConfig {
    /// Formatter plugin name.
    #[serde(default = "default_formatter")]
    pub name: String,

    /// Number of identifier characters shown per node.
    #[serde(default = "default_short_id_len")]
    pub short_id_len: usize,

    /// Include the commit message in node labels.
    #[serde(default = "default_true")]
    pub include_message: bool,
}

impl Default for FormatterPluginConfig {
    fn default() -> Self {
        Self {
            name: default_formatter(),
            short_id_len: default_short_id_len(),
            include_message: true,
        }
    }
}

fn default_formatter() -> String {
    "plantuml".to_string()
}

fn default_short_id_len() -> usize {
    7
}

fn default_true() -> bool {
    true
}

/// PlantUML renderer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Java executable.
    #[serde(default = "default_java")]
    pub java: PathBuf,

    /// Path to `plantuml.jar`.
    #[serde(default = "default_jar")]
    pub jar: PathBuf,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            java: default_java(),
            jar: default_jar(),
        }
    }
}

fn default_java() -> PathBuf {
    PathBuf::from("java")
}

fn default_jar() -> PathBuf {
    PathBuf::from("plantuml.jar")
}
