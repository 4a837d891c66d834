// lib/src/config/mod.rs

pub mod config_constants;
pub mod config_defaults;
pub mod config_helpers;
pub mod config_structs;

pub use config_constants::*;
pub use config_helpers::{apply_env_overrides, load_app_config, parse_config, read_config_file};
pub use config_structs::{AppConfig, AuthConfig, LoggingConfig, StoreConfig};
