//! Submission Event Logger
//!
//! Lifecycle events for form submissions, emitted through `tracing` so they
//! land in the NDJSON file alongside everything else.

use safepost_core::{SubmissionEvent, SubmissionEventKind};
use tracing::{info, warn};

use crate::redact::redact_json_payloads;

pub struct SubmissionEventLogger;

impl SubmissionEventLogger {
    /// Redacts the payload and logs the event. Returns the logged event.
    pub fn log_event(mut event: SubmissionEvent) -> SubmissionEvent {
        event.payload = redact_json_payloads(&event.payload);
        let payload = event.payload.to_string();

        match event.kind {
            SubmissionEventKind::Failed | SubmissionEventKind::Ignored => warn!(
                target: "submission_events",
                submission_id = %event.submission_id,
                mode = %event.mode,
                kind = %event.kind,
                timestamp = %event.timestamp.to_rfc3339(),
                payload = %payload,
                "Submission event"
            ),
            SubmissionEventKind::Started | SubmissionEventKind::Succeeded => info!(
                target: "submission_events",
                submission_id = %event.submission_id,
                mode = %event.mode,
                kind = %event.kind,
                timestamp = %event.timestamp.to_rfc3339(),
                payload = %payload,
                "Submission event"
            ),
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safepost_core::AnalysisMode;
    use serde_json::json;

    #[test]
    fn payload_is_redacted_before_logging() {
        let event = SubmissionEvent::new(
            uuid::Uuid::new_v4(),
            AnalysisMode::Analyze,
            SubmissionEventKind::Started,
            json!({ "image": "AQIDBAUG", "caption": "hi" }),
        );
        let logged = SubmissionEventLogger::log_event(event);
        assert_eq!(logged.payload["image"], "[REDACTED_IMAGE 8 chars]");
        assert_eq!(logged.payload["caption"], "hi");
    }
}
