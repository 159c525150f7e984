use serde::Deserialize;

use crate::config::ConfigError;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub id: String,
    pub log_level: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            id: "rostergate".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ProxyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id.trim().is_empty() {
            return Err(ConfigError::InvalidProxyId);
        }
        Ok(())
    }
}
