//! Remote analysis client: one JSON POST per submission.

use async_trait::async_trait;
use reqwest::Client;
use safepost_core::{
    AnalysisBackend, AnalysisMode, AnalysisRequest, DEFAULT_BASE_URL, RequestError,
};
use safepost_logging::{redact_image_payloads, redact_json_payloads};
use serde_json::Value;
use tracing::{debug, info, warn};

/// HTTP client for the SafePost analysis service.
///
/// No timeout and no retry: a request resolves or fails on the transport's
/// own schedule.
pub struct HttpAnalysisClient {
    client: Client,
    base_url: String,
}

impl HttpAnalysisClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `mode`'s endpoint.
    pub fn endpoint(&self, mode: AnalysisMode) -> String {
        format!("{}{}", self.base_url, mode.endpoint_path())
    }

    /// GET the base URL and return the HTTP status. Any status counts as
    /// reachable; only transport failures are errors.
    pub async fn probe(&self) -> Result<u16, RequestError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        Ok(response.status().as_u16())
    }
}

impl Default for HttpAnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn submit(
        &self,
        mode: AnalysisMode,
        request: &AnalysisRequest,
    ) -> Result<String, RequestError> {
        let url = self.endpoint(mode);
        if let Ok(body) = serde_json::to_value(request) {
            debug!(url = %url, body = %redact_json_payloads(&body), "Sending analysis request");
        }

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        debug!(
            url = %url,
            status = status.as_u16(),
            body = %redact_image_payloads(&body),
            "Received analysis response"
        );

        let parsed = serde_json::from_str::<Value>(&body);

        if !status.is_success() {
            let message = parsed
                .ok()
                .as_ref()
                .and_then(|json| json.get("error"))
                .and_then(Value::as_str)
                .filter(|msg| !msg.is_empty())
                .map(String::from)
                .unwrap_or_else(|| mode.failure_fallback().to_string());
            warn!(
                url = %url,
                status = status.as_u16(),
                error = %message,
                "Analysis request failed"
            );
            return Err(RequestError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let json = parsed.map_err(|e| RequestError::InvalidBody(e.to_string()))?;
        let field = mode.result_field();
        let text = json
            .get(field)
            .and_then(Value::as_str)
            .ok_or(RequestError::MissingField(field))?;

        info!(mode = %mode, chars = text.chars().count(), "Analysis request succeeded");
        Ok(text.to_string())
    }
}
