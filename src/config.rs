//! Application configuration.

use std::{
    net::{SocketAddr, SocketAddrV4},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use config::{Config, FileFormat};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "./config.yaml";

fn default_listen() -> SocketAddr {
    SocketAddr::V4(SocketAddrV4::new([0, 0, 0, 0].into(), 8080))
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("./cache.yaml")
}

/// Application configuration.
///
/// Built once at startup and never mutated afterwards.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// Upstream subscription endpoint.
    pub url: Url,
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
    /// Worker count, defaults to the number of CPUs.
    #[serde(default)]
    pub workers: Option<usize>,
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,
    /// Upstream request timeout. Requests never time out when unset.
    #[serde(default)]
    pub request_timeout: Option<Duration>,
}

/// Load application configuration.
///
/// The file at `config_path` is required and parsed as YAML. Any key can be
/// overridden with a `SUBCACHE__<KEY>` environment variable.
pub fn load_config(config_path: &Path) -> Result<AppConfig> {
    let config = Config::builder()
        .add_source(
            config::File::new(&config_path.to_string_lossy(), FileFormat::Yaml).required(true),
        )
        .add_source(
            config::Environment::with_prefix("SUBCACHE")
                .separator("__")
                .list_separator(","),
        )
        .build()
        .context("failed to load config")?;

    debug!("Raw configuration: {:#?}", config);

    let app: AppConfig = config
        .try_deserialize()
        .context("failed to deserialize config")?;

    debug!("Loaded application configuration: {:#?}", app);

    Ok(app)
}
