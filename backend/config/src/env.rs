//! Environment variable overrides for config values.
//!
//! Applied after the YAML file and before defaults, so an env var beats the
//! file and a CLI flag beats both.

use anyhow::{anyhow, Result};
use safepost_core::AnalysisMode;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::schema::{LoggingConfig, SafePostConfig};

pub const ENV_BASE_URL: &str = "SAFEPOST_BASE_URL";
pub const ENV_MODE: &str = "SAFEPOST_MODE";
pub const ENV_LOG_LEVEL: &str = "SAFEPOST_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "SAFEPOST_LOG_DIR";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: SafePostConfig) -> Result<SafePostConfig> {
    apply_env_overrides_with(config, &std::env::vars().collect())
}

/// Apply overrides using a provided map (useful for testing).
///
/// Empty values are ignored.
pub fn apply_env_overrides_with(
    mut config: SafePostConfig,
    env: &HashMap<String, String>,
) -> Result<SafePostConfig> {
    let get = |key: &str| env.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

    if let Some(url) = get(ENV_BASE_URL) {
        config.set_base_url(url);
    }
    if let Some(mode) = get(ENV_MODE) {
        let mode: AnalysisMode = mode.parse().map_err(|e| anyhow!("{ENV_MODE}: {e}"))?;
        config.set_mode(mode);
    }
    if let Some(level) = get(ENV_LOG_LEVEL) {
        config.logging.get_or_insert_with(LoggingConfig::default).level = Some(level.to_string());
    }
    if let Some(dir) = get(ENV_LOG_DIR) {
        config.logging.get_or_insert_with(LoggingConfig::default).dir = Some(PathBuf::from(dir));
    }
    Ok(config)
}
