//! `parse`: run the response parser on saved analysis text.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use safepost_core::{AnalysisMode, AnalysisReport};
use safepost_understanding::parse_analysis;

use crate::terminal_output::render_report;

pub async fn run(file: Option<&Path>, json: bool) -> Result<ExitCode> {
    let text = match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read stdin")?;
            buf
        }
    };

    let report = AnalysisReport {
        mode: AnalysisMode::Analyze,
        outcome: parse_analysis(&text),
    };

    if json {
        let value = serde_json::json!({
            "outcome": report.outcome,
            "complete": report.outcome.is_complete(),
            "display": report.display_text(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", render_report(&report));
    }

    Ok(if report.outcome.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
