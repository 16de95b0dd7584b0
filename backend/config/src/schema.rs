//! SafePost configuration schema, typed for serde YAML/JSON.

use safepost_core::{AnalysisMode, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafePostConfig {
    /// Remote analysis service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<EndpointConfig>,

    /// Form defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<FormDefaults>,

    /// Logging configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<AnalysisMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "safepost_understanding=debug"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Directory for rolling NDJSON logs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
}

impl SafePostConfig {
    pub fn base_url(&self) -> &str {
        self.endpoint
            .as_ref()
            .and_then(|e| e.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn mode(&self) -> AnalysisMode {
        self.defaults
            .as_ref()
            .and_then(|d| d.mode)
            .unwrap_or_default()
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or(crate::defaults::DEFAULT_LOG_LEVEL)
    }

    pub fn log_dir(&self) -> Option<&PathBuf> {
        self.logging.as_ref().and_then(|l| l.dir.as_ref())
    }

    pub fn log_json(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.endpoint
            .get_or_insert_with(EndpointConfig::default)
            .base_url = Some(url.into());
    }

    pub fn set_mode(&mut self, mode: AnalysisMode) {
        self.defaults.get_or_insert_with(FormDefaults::default).mode = Some(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_yaml() {
        let yaml = "\
endpoint:
  baseUrl: http://localhost:5000
defaults:
  mode: risk
logging:
  level: debug
  json: true
";
        let cfg: SafePostConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.base_url(), "http://localhost:5000");
        assert_eq!(cfg.mode(), AnalysisMode::Risk);
        assert_eq!(cfg.log_level(), "debug");
        assert!(cfg.log_json());
    }

    #[test]
    fn empty_config_falls_back() {
        let cfg = SafePostConfig::default();
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.mode(), AnalysisMode::Analyze);
        assert!(cfg.log_dir().is_none());
    }

    #[test]
    fn skips_unset_sections_when_serializing() {
        let yaml = serde_yaml::to_string(&SafePostConfig::default()).unwrap();
        assert_eq!(yaml.trim(), "{}");
    }
}
