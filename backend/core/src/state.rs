use serde::{Deserialize, Serialize};

use crate::types::{AnalysisMode, AnalysisOutcome};

/// A completed analysis, tagged with the mode that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub mode: AnalysisMode,
    pub outcome: AnalysisOutcome,
}

impl AnalysisReport {
    pub fn display_text(&self) -> String {
        self.outcome.display_text(self.mode)
    }
}

/// Per-form submission state.
///
/// `Idle -> Loading -> {Succeeded | Failed}`; a new submission clears the
/// previous result before entering `Loading`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Succeeded { report: AnalysisReport },
    Failed { message: String },
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Succeeded { report } => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// What a call to submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Succeeded(AnalysisReport),
    Failed(String),
    /// Another submission was already in flight; nothing was sent.
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let state = SubmissionState::default();
        assert_eq!(state, SubmissionState::Idle);
        assert!(!state.is_loading());
        assert!(state.report().is_none());
    }

    #[test]
    fn failed_exposes_message() {
        let state = SubmissionState::Failed {
            message: "분석 실패".into(),
        };
        assert_eq!(state.error(), Some("분석 실패"));
    }

    #[test]
    fn serializes_with_state_tag() {
        let json = serde_json::to_value(SubmissionState::Loading).unwrap();
        assert_eq!(json["state"], "loading");
    }
}
