//! Configuration Management
//!
//! Handles persistent configuration storage for guardctl.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Data protection service endpoint
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Identity service URL
    #[serde(default)]
    pub auth_url: Option<String>,
    /// Identity user name
    #[serde(default)]
    pub username: Option<String>,
    /// Project to scope requests to
    #[serde(default)]
    pub project_name: Option<String>,
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("guardctl").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Get effective endpoint (CLI/env > config)
    pub fn effective_endpoint(&self, flag: Option<&str>) -> Option<String> {
        flag.map(str::to_string).or_else(|| self.endpoint.clone())
    }

    /// Get effective auth URL (CLI/env > config)
    pub fn effective_auth_url(&self, flag: Option<&str>) -> Option<String> {
        flag.map(str::to_string).or_else(|| self.auth_url.clone())
    }

    /// Get effective user name (CLI/env > config)
    pub fn effective_username(&self, flag: Option<&str>) -> Option<String> {
        flag.map(str::to_string).or_else(|| self.username.clone())
    }

    /// Get effective project (CLI/env > config)
    pub fn effective_project(&self, flag: Option<&str>) -> Option<String> {
        flag.map(str::to_string).or_else(|| self.project_name.clone())
    }
}
