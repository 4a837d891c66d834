// lib/src/config/config_defaults.rs
use std::path::PathBuf;

pub use crate::config::config_constants::*;

pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}
pub fn default_seed_path() -> Option<PathBuf> { None }
pub fn default_demo_username() -> String { DEFAULT_DEMO_USERNAME.to_string() }
pub fn default_demo_password() -> String { DEFAULT_DEMO_PASSWORD.to_string() }
pub fn default_log_level() -> String { DEFAULT_LOG_LEVEL.to_string() }
