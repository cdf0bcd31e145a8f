//! Configuration loading and management

use anyhow::{Context, Result};
use legl_fields_domain::{BlankFields, DeriverKind, policy::OnUnrecognized};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "./legl-fields.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub derive: DeriveSection,

    #[serde(default)]
    pub keys: KeysConfig,

    #[serde(default)]
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub records_path: Option<PathBuf>,

    #[serde(default)]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeriveSection {
    #[serde(default = "default_derivers")]
    pub derivers: Vec<String>,

    #[serde(default)]
    pub on_unrecognized: OnUnrecognized,

    /// 0 disables the limit
    #[serde(default)]
    pub max_value_chars: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeysConfig {
    #[serde(default)]
    pub blank_fields: BlankFields,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub tables_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_derivers() -> Vec<String> {
    DeriverKind::ALL
        .iter()
        .map(|kind| kind.name().to_string())
        .collect()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            records_path: None,
            output: OutputFormat::default(),
        }
    }
}

impl Default for DeriveSection {
    fn default() -> Self {
        Self {
            derivers: default_derivers(),
            on_unrecognized: OnUnrecognized::default(),
            max_value_chars: 0,
        }
    }
}

impl DeriveSection {
    pub fn max_value_chars(&self) -> Option<usize> {
        (self.max_value_chars > 0).then_some(self.max_value_chars)
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            // User specified a path that doesn't exist
            anyhow::bail!("Config file not found: {}", path.display());
        }

        // Add environment variable overrides
        builder = builder.add_source(
            config::Environment::with_prefix("LEGL_FIELDS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# legl-fields configuration

[general]
log_level = "info"
# records_path = "./records.json"
output = "text"  # text, json

[derive]
derivers = [
    "dutyholders", "dutyholders-loose", "dutyholders-rus", "duty-type", "popimar",
    "uk-key", "de-key", "url", "url-title",
    "tech-rule", "year", "day", "month", "plan",
]
on_unrecognized = "empty"  # empty, reject
# 0 disables the limit
max_value_chars = 0

[keys]
blank_fields = "skip"  # skip, positional

[rules]
# tables_dir = "./rules"
"#
        .to_string()
    }
}
