//! `safepost-config`: SafePost configuration management.
//!
//! Provides:
//! - Typed config schema (endpoint, form defaults, logging)
//! - YAML read/write
//! - `SAFEPOST_*` environment overrides
//! - Default value application
//! - Validation with errors and warnings

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

// Re-export most-used types at crate root.
pub use schema::{EndpointConfig, FormDefaults, LoggingConfig, SafePostConfig};
pub use io::{config_dir, config_file_path, load_config, write_config};
pub use env::{apply_env_overrides, apply_env_overrides_with};
pub use defaults::{apply_all_defaults, DEFAULT_LOG_LEVEL};
pub use validation::{validate, ValidationReport, ConfigValidationError};

use anyhow::Result;
use std::path::Path;

/// Load a config file, apply env overrides, then apply defaults.
///
/// Validation is left to the caller so that CLI flags can be applied first.
pub async fn load_and_prepare(path: &Path) -> Result<SafePostConfig> {
    let config = load_config(path).await?;
    let config = apply_env_overrides(config)?;
    Ok(apply_all_defaults(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prepares_file_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file_path(dir.path());
        tokio::fs::write(&path, "endpoint:\n  baseUrl: http://localhost:5000/\n")
            .await
            .unwrap();

        let cfg = load_and_prepare(&path).await.unwrap();
        // SAFEPOST_BASE_URL may be set in the environment running the tests.
        if std::env::var(env::ENV_BASE_URL).is_err() {
            assert_eq!(cfg.base_url(), "http://localhost:5000");
        }
        assert!(cfg.logging.is_some());
        assert!(cfg.defaults.is_some());
    }
}
