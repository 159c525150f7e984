use serde::Deserialize;
use url::Url;

use crate::config::ConfigError;

/// Location of the V1 employee service this facade fronts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the employee collection endpoint. Per-id requests append
    /// the id as a path segment.
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8112/api/v1/employee".to_string(),
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Url::parse(&self.base_url).is_err() {
            return Err(ConfigError::InvalidBackendUrl {
                url: self.base_url.clone(),
            });
        }
        Ok(())
    }
}
