// lib/src/config/config_constants.rs

pub const DEFAULT_CONFIG_FILE: &str = "thalcare.yaml";
pub const CONFIG_PATH_ENV: &str = "THALCARE_CONFIG";

pub const DEMO_USERNAME_ENV: &str = "THALCARE_DEMO_USERNAME";
pub const DEMO_PASSWORD_ENV: &str = "THALCARE_DEMO_PASSWORD";
pub const DEFAULT_DEMO_USERNAME: &str = "demo";
pub const DEFAULT_DEMO_PASSWORD: &str = "Demo123";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Vitals retained by the store; older readings fall off the end.
pub const VITALS_HISTORY_LIMIT: usize = 10;
