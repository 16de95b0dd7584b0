//! Structured Logger
//!
//! Wraps `tracing` with env-based level control, a console layer, and an
//! optional daily-rolling NDJSON file.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logger settings, usually taken from the `logging` config section.
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
    /// Directory for `safepost.log.YYYY-MM-DD`; no file output when `None`.
    pub log_dir: Option<PathBuf>,
    /// Emit JSON on the console instead of the human format.
    pub json: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            log_dir: None,
            json: false,
        }
    }
}

/// Initialize the global logger. Later calls are no-ops.
///
/// Console output goes to stderr so that stdout stays reserved for results.
pub fn init_logger(options: &LoggerOptions) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&options.level));

    let console_layer = if options.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(true)
            .boxed()
    };

    let file_layer = options.log_dir.as_ref().map(|dir| {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "safepost.log");
        fmt::layer()
            .json()
            .with_writer(file_appender)
            .with_ansi(false)
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
}
