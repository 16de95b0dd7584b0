//! Config defaults: fills every unset field so the effective config can be
//! printed in full.

use crate::schema::{EndpointConfig, FormDefaults, LoggingConfig, SafePostConfig};
use safepost_core::DEFAULT_BASE_URL;

/// Default log filter when neither config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: SafePostConfig) -> SafePostConfig {
    let config = apply_endpoint_defaults(config);
    let config = apply_form_defaults(config);
    apply_logging_defaults(config)
}

/// Default base URL; strip trailing slashes from a configured one.
fn apply_endpoint_defaults(mut config: SafePostConfig) -> SafePostConfig {
    let endpoint = config.endpoint.get_or_insert_with(EndpointConfig::default);
    let url = endpoint
        .base_url
        .take()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    endpoint.base_url = Some(url.trim().trim_end_matches('/').to_string());
    config
}

fn apply_form_defaults(mut config: SafePostConfig) -> SafePostConfig {
    let defaults = config.defaults.get_or_insert_with(FormDefaults::default);
    if defaults.mode.is_none() {
        defaults.mode = Some(Default::default());
    }
    config
}

fn apply_logging_defaults(mut config: SafePostConfig) -> SafePostConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    if logging.level.is_none() {
        logging.level = Some(DEFAULT_LOG_LEVEL.to_string());
    }
    if logging.json.is_none() {
        logging.json = Some(false);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use safepost_core::AnalysisMode;

    #[test]
    fn fills_every_section() {
        let cfg = apply_all_defaults(SafePostConfig::default());
        assert_eq!(cfg.endpoint.unwrap().base_url.unwrap(), DEFAULT_BASE_URL);
        assert_eq!(cfg.defaults.unwrap().mode, Some(AnalysisMode::Analyze));
        assert_eq!(cfg.logging.unwrap().level.unwrap(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn normalises_trailing_slash() {
        let mut cfg = SafePostConfig::default();
        cfg.set_base_url("http://localhost:5000//");
        let cfg = apply_all_defaults(cfg);
        assert_eq!(cfg.base_url(), "http://localhost:5000");
    }

    #[test]
    fn does_not_override_user_mode() {
        let mut cfg = SafePostConfig::default();
        cfg.set_mode(AnalysisMode::Risk);
        let cfg = apply_all_defaults(cfg);
        assert_eq!(cfg.mode(), AnalysisMode::Risk);
    }
}
