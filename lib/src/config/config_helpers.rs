// lib/src/config/config_helpers.rs
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::config_defaults::*;
use crate::config::config_structs::AppConfig;
use crate::errors::{Result, StoreError};

/// Loads the application config.
///
/// An explicit path must exist. Otherwise `THALCARE_CONFIG` is consulted,
/// then `./thalcare.yaml`; when neither is present the defaults are used.
/// Demo credential overrides from the environment (or a `.env` file) are
/// applied last.
pub fn load_app_config(config_file_path: Option<&Path>) -> Result<AppConfig> {
    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let mut config = match config_file_path {
        Some(path) => read_config_file(path)?,
        None => {
            let path_to_use = std::env::var(CONFIG_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_config_path());
            if path_to_use.exists() {
                read_config_file(&path_to_use)?
            } else {
                warn!("Config file not found at {}. Using default config.", path_to_use.display());
                AppConfig::default()
            }
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

pub fn read_config_file(path: &Path) -> Result<AppConfig> {
    info!("Loading config from {:?}", path);
    let config_content = fs::read_to_string(path).map_err(|source| StoreError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&config_content)
        .map_err(|e| StoreError::ConfigurationError(format!("Failed to parse {}: {}", path.display(), e)))
}

pub fn parse_config(content: &str) -> Result<AppConfig> {
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(content)?;
    config.logging.level_filter()?;
    Ok(config)
}

/// Replaces the demo credentials with whatever `lookup` yields for the
/// credential variables.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(username) = lookup(DEMO_USERNAME_ENV).filter(|v| !v.is_empty()) {
        debug!("Demo username overridden from {}", DEMO_USERNAME_ENV);
        config.auth.username = username;
    }
    if let Some(password) = lookup(DEMO_PASSWORD_ENV).filter(|v| !v.is_empty()) {
        debug!("Demo password overridden from {}", DEMO_PASSWORD_ENV);
        config.auth.password = password;
    }
}
