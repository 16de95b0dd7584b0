//! Config validation with field paths and user-facing messages.

use crate::schema::SafePostConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use url::Url;

const LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1", "[::1]", "0.0.0.0"];

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &SafePostConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_endpoint(config, &mut report);
    validate_logging(config, &mut report);
    report
}

fn validate_endpoint(config: &SafePostConfig, report: &mut ValidationReport) {
    let raw = config.base_url();
    let path = "endpoint.baseUrl";

    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(e) => {
            report.error(path, format!("'{raw}' is not a valid URL: {e}"));
            return;
        }
    };
    if !matches!(url.scheme(), "http" | "https") {
        report.error(
            path,
            format!("Unsupported scheme '{}'. Use 'http' or 'https'", url.scheme()),
        );
        return;
    }
    let Some(host) = url.host_str().filter(|h| !h.is_empty()) else {
        report.error(path, format!("'{raw}' has no host"));
        return;
    };

    if url.scheme() == "http" && !LOCAL_HOSTS.contains(&host) {
        report.warn(path, "Plain http to a remote host sends images unencrypted");
    }
    if url.query().is_some() || url.fragment().is_some() {
        report.warn(path, "Query or fragment in base URL will precede the endpoint path");
    }
}

fn validate_logging(config: &SafePostConfig, report: &mut ValidationReport) {
    if let Err(e) = EnvFilter::try_new(config.log_level()) {
        report.error("logging.level", format!("Invalid log filter: {e}"));
    }

    if let Some(dir) = config.log_dir() {
        if dir.as_os_str().is_empty() {
            report.error("logging.dir", "Log directory cannot be empty");
        }
    }
}
