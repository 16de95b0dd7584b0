mod config_cmd;
mod parse_cmd;
mod status_cmd;
mod submit_cmd;
mod terminal_output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use safepost_config::{config_dir, config_file_path, load_and_prepare, validate, SafePostConfig};
use safepost_core::AnalysisMode;
use safepost_logging::{init_logger, LoggerOptions};

use submit_cmd::SubmitArgs;

#[derive(Parser)]
#[command(name = "safepost")]
#[command(about = "SafePost: check a post image before you upload it")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.safepost/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Analysis service base URL, overriding config and environment
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Basic analysis of an image and optional caption
    Analyze {
        #[command(flatten)]
        args: SubmitArgs,
    },
    /// Assess how a specific acquaintance is likely to react
    Risk {
        /// Acquaintance identifier
        #[arg(short, long)]
        target: String,

        #[command(flatten)]
        args: SubmitArgs,
    },
    /// Submit in the configured default mode
    Check {
        /// Override the configured mode
        #[arg(short, long)]
        mode: Option<AnalysisMode>,

        /// Acquaintance identifier (risk mode)
        #[arg(short, long)]
        target: Option<String>,

        #[command(flatten)]
        args: SubmitArgs,
    },
    /// Parse analysis text offline; reads stdin when FILE is omitted
    Parse {
        file: Option<PathBuf>,

        /// Print the parsed fields as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that the analysis service is reachable
    Status,
    /// Print the effective configuration
    Config {
        /// Also write it to the config file
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| config_file_path(&config_dir()));
    let mut config = load_and_prepare(&config_path).await?;
    if let Some(url) = &cli.base_url {
        config.set_base_url(url.trim().trim_end_matches('/'));
    }

    init_logger(&LoggerOptions {
        level: config.log_level().to_string(),
        log_dir: config.log_dir().cloned(),
        json: config.log_json(),
    });
    debug!(path = %config_path.display(), base_url = %config.base_url(), "Configuration loaded");

    check_config(&config)?;

    match cli.command {
        Commands::Analyze { args } => {
            submit_cmd::run(&config, AnalysisMode::Analyze, None, args).await
        }
        Commands::Risk { target, args } => {
            submit_cmd::run(&config, AnalysisMode::Risk, Some(target), args).await
        }
        Commands::Check { mode, target, args } => {
            let mode = mode.unwrap_or_else(|| config.mode());
            submit_cmd::run(&config, mode, target, args).await
        }
        Commands::Parse { file, json } => parse_cmd::run(file.as_deref(), json).await,
        Commands::Status => status_cmd::run(&config).await,
        Commands::Config { write } => config_cmd::run(&config, &config_path, write).await,
    }
}

fn check_config(config: &SafePostConfig) -> Result<()> {
    let report = validate(config);
    for warning in &report.warnings {
        warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    if !report.is_valid() {
        for error in &report.errors {
            terminal_output::note_error(&error.to_string());
        }
        bail!("invalid configuration");
    }
    Ok(())
}
