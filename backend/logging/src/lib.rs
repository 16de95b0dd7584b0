//! Structured logging for SafePost.
//!
//! Console + optional rolling NDJSON output, payload redaction, and
//! submission lifecycle events.

pub mod event_logger;
pub mod logger;
pub mod redact;

pub use event_logger::SubmissionEventLogger;
pub use logger::{init_logger, LoggerOptions};
pub use redact::{redact_image_payloads, redact_json_payloads};
