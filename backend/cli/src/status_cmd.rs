//! CLI Status Command
//!
//! Reports whether the configured analysis service answers at all.

use std::process::ExitCode;

use anyhow::Result;

use safepost_config::SafePostConfig;
use safepost_understanding::HttpAnalysisClient;

use crate::terminal_output::{note_error, note_success};

pub async fn run(config: &SafePostConfig) -> Result<ExitCode> {
    println!("\n📡 SafePost service status\n");
    println!("  Endpoint: {}", config.base_url());
    println!("  Mode:     {} ({})\n", config.mode(), config.mode().title());

    let client = HttpAnalysisClient::new().with_base_url(config.base_url());
    match client.probe().await {
        Ok(status) => {
            note_success(&format!("Service reachable (HTTP {status})"));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            note_error(&format!("Service unreachable: {e}"));
            Ok(ExitCode::FAILURE)
        }
    }
}
