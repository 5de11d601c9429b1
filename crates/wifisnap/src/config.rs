//! CLI configuration: defaults merged with an optional TOML file and
//! `WIFISNAP_*` environment overrides. The core never reads config --
//! the CLI translates this into constructor arguments.

use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use wifisnap_core::RasterOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Seconds before a join attempt falls forward to the manual hint.
    pub confirm_delay_secs: u64,

    /// Geometry handed to the QR rasterizer.
    pub raster: RasterOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confirm_delay_secs: 3,
            raster: RasterOptions::default(),
        }
    }
}

impl Config {
    pub fn confirm_delay(&self) -> Duration {
        Duration::from_secs(self.confirm_delay_secs)
    }
}

/// Load defaults < `~/.config/wifisnap/config.toml` < `WIFISNAP_*` env.
///
/// Nested env keys use double underscores: `WIFISNAP_RASTER__WIDTH_PX`.
pub fn load() -> Result<Config, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(dirs) = ProjectDirs::from("", "", "wifisnap") {
        figment = figment.merge(Toml::file(dirs.config_dir().join("config.toml")));
    }

    Ok(figment
        .merge(Env::prefixed("WIFISNAP_").split("__"))
        .extract()?)
}
