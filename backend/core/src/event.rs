use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::AnalysisMode;

/// A lifecycle event for one form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionEvent {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub mode: AnalysisMode,
    pub timestamp: DateTime<Utc>,
    pub kind: SubmissionEventKind,
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionEventKind {
    /// Request issued
    Started,
    /// Result received and parsed
    Succeeded,
    /// Transport or server failure
    Failed,
    /// Submit pressed while a request was in flight
    Ignored,
}

impl SubmissionEvent {
    pub fn new(
        submission_id: Uuid,
        mode: AnalysisMode,
        kind: SubmissionEventKind,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            submission_id,
            mode,
            timestamp: Utc::now(),
            kind,
            payload,
        }
    }
}

impl std::fmt::Display for SubmissionEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Started => "started",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Ignored => "ignored",
        };
        write!(f, "{s}")
    }
}
