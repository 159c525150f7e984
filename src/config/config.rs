use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{BackendConfig, Cli, LoggingConfig, NetworkConfig, ProxyConfig};

/// Error type for configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("proxy id must not be empty")]
    InvalidProxyId,
    #[error("invalid backend base_url '{url}'")]
    InvalidBackendUrl { url: String },
    #[error("bind_address must not be empty")]
    InvalidBindAddress,
}

/// Top-level application configuration, loaded from a TOML file.
///
/// Every section has working defaults so the facade can start with no config
/// file at all and talk to a local backend.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub proxy: ProxyConfig,
    pub network: NetworkConfig,
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads and validates configuration from a TOML file.
    pub fn load(path: &str) -> anyhow::Result<Config> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path}"))?;
        let config: Config =
            toml::from_str(&raw).with_context(|| format!("Failed to parse config file {path}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Builds configuration from process arguments: the first positional
    /// argument names the config file, otherwise defaults apply.
    pub fn from_args() -> anyhow::Result<Config> {
        match Cli::from_env().config_path {
            Some(path) => Self::load(&path),
            None => {
                let config = Config::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.proxy.validate()?;
        self.network.validate()?;
        self.backend.validate()?;
        Ok(())
    }
}
