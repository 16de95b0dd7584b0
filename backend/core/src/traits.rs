use async_trait::async_trait;

use crate::error::RequestError;
use crate::types::{AnalysisMode, AnalysisRequest};

/// A service that can analyze an upload.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Backend name used in logs (e.g., "http").
    fn name(&self) -> &str;

    /// Submit `request` in `mode` and return the result text verbatim.
    async fn submit(
        &self,
        mode: AnalysisMode,
        request: &AnalysisRequest,
    ) -> Result<String, RequestError>;
}
