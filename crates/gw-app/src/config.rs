//! Application configuration file.

use std::path::Path;
use std::time::Duration;

use gw_client::{BACKEND_URL_ENV, ClientConfig, DEFAULT_BACKEND_URL};
use gw_layout::LayoutConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Everything a session needs that is not derived from the graph.
///
/// Every field is optional in YAML; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub layout: LayoutConfig,
    /// Auto-play step period in milliseconds.
    pub auto_play_interval_ms: u64,
    pub backend_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            auto_play_interval_ms: 1000,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from a YAML file, then apply environment overrides.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_yaml_str(&content)?.with_env_overrides();
        debug!(path = %path.display(), backend = %config.backend_url, "config loaded");
        Ok(config)
    }

    /// Parse and validate YAML without consulting the environment.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let config: AppConfig = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// `GRAPHWALK_BACKEND_URL` wins over the file.
    pub fn with_env_overrides(self) -> Self {
        self.with_backend_override(std::env::var(BACKEND_URL_ENV).ok())
    }

    fn with_backend_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.backend_url = url;
        }
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        self.layout.validate()?;
        if self.auto_play_interval_ms == 0 {
            return Err(AppError::Config(
                "auto_play_interval_ms must be positive".to_string(),
            ));
        }
        if self.backend_url.trim().is_empty() {
            return Err(AppError::Config("backend_url must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn auto_play_interval(&self) -> Duration {
        Duration::from_millis(self.auto_play_interval_ms)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.backend_url)
    }
}
