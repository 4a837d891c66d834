// lib/src/config/config_structs.rs
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::config::config_defaults::*;
use crate::errors::{Result, StoreError};

/// Top-level configuration, mirroring `thalcare.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Snapshot to seed the store from; the demo fixtures when absent.
    #[serde(default = "default_seed_path")]
    pub seed_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig { seed_path: default_seed_path() }
    }
}

/// The demo credentials the authentication gate compares against.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_demo_username")]
    pub username: String,
    #[serde(default = "default_demo_password")]
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            username: default_demo_username(),
            password: default_demo_password(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { level: default_log_level() }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level)
            .map_err(|_| StoreError::ConfigurationError(format!("Unknown log level: {}", self.level)))
    }
}
