use std::sync::Arc;

use async_trait::async_trait;
use safepost_core::{AnalysisBackend, AnalysisMode, AnalysisRequest, RequestError};
use tokio::sync::{Mutex, Notify};

/// A backend that returns a canned response and records every call.
pub struct MockBackend {
    response: Result<String, RequestError>,
    calls: Mutex<Vec<(AnalysisMode, AnalysisRequest)>>,
    gate: Option<Arc<Notify>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            response: Ok("Mock response".to_string()),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Ok(response.into());
        self
    }

    pub fn with_error(mut self, error: RequestError) -> Self {
        self.response = Err(error);
        self
    }

    /// Hold each call open until the gate is notified.
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub async fn calls(&self) -> Vec<(AnalysisMode, AnalysisRequest)> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn submit(
        &self,
        mode: AnalysisMode,
        request: &AnalysisRequest,
    ) -> Result<String, RequestError> {
        self.calls.lock().await.push((mode, request.clone()));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.response.clone()
    }
}
