
mod backend_config;
mod logging_config;
mod network_config;
mod proxy_config;
pub mod config;

pub use backend_config::BackendConfig;
pub use config::{Config, ConfigError};
pub use logging_config::LoggingConfig;
pub use network_config::{HttpConfig, NetworkConfig};
pub use proxy_config::ProxyConfig;

/// Structure representing application startup arguments or metadata.
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file.
    pub config_path: Option<String>,
}

impl Cli {
    /// Reads the configuration path from the first positional argument, if
    /// one was given.
    pub fn from_env() -> Self {
        Self {
            config_path: std::env::args().nth(1),
        }
    }
}
