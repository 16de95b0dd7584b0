pub mod client;
pub mod form;
pub mod mock;
pub mod outcome;

pub use client::HttpAnalysisClient;
pub use form::AnalysisForm;
pub use mock::MockBackend;
pub use outcome::{extract_score, parse_analysis};
