//! `config`: print, and optionally persist, the effective configuration.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use safepost_config::{write_config, SafePostConfig};

use crate::terminal_output::note_success;

pub async fn run(config: &SafePostConfig, path: &Path, write: bool) -> Result<ExitCode> {
    let yaml = serde_yaml::to_string(config).context("Failed to serialize config")?;
    print!("{yaml}");

    if write {
        write_config(config, path).await?;
        note_success(&format!("Wrote {}", path.display()));
    }
    Ok(ExitCode::SUCCESS)
}
