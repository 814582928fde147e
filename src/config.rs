// Application configuration
//
// Layered, lowest to highest precedence:
//   built-in defaults -> optional TOML file -> DIGITIZATION_WIZARD_* environment variables

use anyhow::{Context, Result};
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const ENV_PREFIX: &str = "DIGITIZATION_WIZARD";
pub const DEFAULT_CONFIG_FILE: &str = "digitization-wizard.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartView {
    #[default]
    Wizard,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub start_view: StartView,
    pub log_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
    pub json_log: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_view: StartView::Wizard,
            log_level: "debug".to_string(),
            log_dir: None,
            json_log: true,
        }
    }
}

impl AppConfig {
    /// Load from an explicit file (must exist), or `digitization-wizard.toml` in the CWD if
    /// present, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    pub(crate) fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = defaults()?;

        builder = match path {
            Some(p) => builder.add_source(File::from(p).format(FileFormat::Toml).required(true)),
            None => builder.add_source(
                File::with_name(DEFAULT_CONFIG_FILE)
                    .format(FileFormat::Toml)
                    .required(false),
            ),
        };

        let cfg: AppConfig = builder
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        cfg.level_filter()?;
        Ok(cfg)
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| anyhow::anyhow!("Invalid log_level '{}'", self.log_level))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize configuration")
    }
}

fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>> {
    let d = AppConfig::default();
    Ok(Config::builder()
        .set_default("start_view", "wizard")?
        .set_default("log_level", d.log_level)?
        .set_default("json_log", d.json_log)?)
}
