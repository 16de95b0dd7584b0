pub mod error;
pub mod event;
pub mod state;
pub mod traits;
pub mod types;

pub use error::{RequestError, SafePostError, ValidationError};
pub use event::{SubmissionEvent, SubmissionEventKind};
pub use state::{AnalysisReport, Submission, SubmissionState};
pub use traits::AnalysisBackend;
pub use types::{
    AnalysisMode, AnalysisOutcome, AnalysisRequest, EncodedImage, Upload, DEFAULT_BASE_URL,
    FALLBACK_MESSAGE,
};
