//! Analysis form: the component-local state behind one upload form.
//!
//! Holds the mode, the current upload, a loading flag, and the submission
//! state. At most one request is in flight per form; pressing submit while
//! loading does nothing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use safepost_core::{
    AnalysisBackend, AnalysisMode, AnalysisReport, AnalysisRequest, EncodedImage, Submission,
    SubmissionEvent, SubmissionEventKind, SubmissionState, Upload, ValidationError,
};
use safepost_logging::SubmissionEventLogger;
use safepost_media::{decode_data_url, encode_image, SelectedFile};
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::outcome::parse_analysis;

pub struct AnalysisForm {
    mode: RwLock<AnalysisMode>,
    upload: RwLock<Upload>,
    state: RwLock<SubmissionState>,
    loading: AtomicBool,
    backend: Arc<dyn AnalysisBackend>,
}

/// Clears the loading flag when the submission ends, however it ends.
/// A submission dropped mid-request leaves the state back at `Idle`.
struct LoadingGuard<'a> {
    loading: &'a AtomicBool,
    state: &'a RwLock<SubmissionState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.try_write() {
            if state.is_loading() {
                *state = SubmissionState::Idle;
            }
        }
        self.loading.store(false, Ordering::Release);
    }
}

impl AnalysisForm {
    pub fn new(mode: AnalysisMode, backend: Arc<dyn AnalysisBackend>) -> Self {
        Self {
            mode: RwLock::new(mode),
            upload: RwLock::new(Upload::default()),
            state: RwLock::new(SubmissionState::Idle),
            loading: AtomicBool::new(false),
            backend,
        }
    }

    pub async fn mode(&self) -> AnalysisMode {
        *self.mode.read().await
    }

    /// Switch mode. The upload and any previous result are kept.
    pub async fn set_mode(&self, mode: AnalysisMode) {
        *self.mode.write().await = mode;
        debug!(mode = %mode, "Form mode changed");
    }

    /// Gate and encode a selected file into the upload.
    ///
    /// On rejection the upload keeps its previous image.
    pub async fn select_image(&self, file: &SelectedFile) -> Result<EncodedImage, ValidationError> {
        let encoded = encode_image(file)?;
        self.upload.write().await.image = Some(encoded.clone());
        Ok(encoded)
    }

    /// Same as [`select_image`](Self::select_image) for a `data:` URL.
    pub async fn select_data_url(&self, url: &str) -> Result<EncodedImage, ValidationError> {
        let encoded = decode_data_url(url)?;
        self.upload.write().await.image = Some(encoded.clone());
        Ok(encoded)
    }

    pub async fn set_caption(&self, caption: impl Into<String>) {
        self.upload.write().await.caption = caption.into();
    }

    pub async fn set_target_id(&self, target_id: impl Into<String>) {
        self.upload.write().await.target_id = target_id.into();
    }

    pub async fn upload(&self) -> Upload {
        self.upload.read().await.clone()
    }

    pub async fn state(&self) -> SubmissionState {
        self.state.read().await.clone()
    }

    /// The last successful report, if it belongs to the current mode.
    pub async fn current_report(&self) -> Option<AnalysisReport> {
        let mode = self.mode().await;
        self.state
            .read()
            .await
            .report()
            .filter(|report| report.mode == mode)
            .cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Label for the submit control in the current state.
    pub async fn submit_label(&self) -> &'static str {
        let mode = self.mode().await;
        if self.is_loading() {
            mode.loading_label()
        } else {
            mode.submit_label()
        }
    }

    /// Submit the current upload.
    ///
    /// Validation failures return `Err` with no state change and no request.
    /// Transport and server failures are recorded as `Failed` and returned
    /// as [`Submission::Failed`].
    pub async fn submit(&self) -> Result<Submission, ValidationError> {
        let mode = self.mode().await;

        if self.is_loading() {
            return Ok(self.ignored(mode));
        }

        let request = AnalysisRequest::from_upload(mode, &*self.upload.read().await)?;

        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(self.ignored(mode));
        }
        let _guard = LoadingGuard {
            loading: &self.loading,
            state: &self.state,
        };

        let submission_id = Uuid::new_v4();
        *self.state.write().await = SubmissionState::Loading;
        SubmissionEventLogger::log_event(SubmissionEvent::new(
            submission_id,
            mode,
            SubmissionEventKind::Started,
            json!({
                "backend": self.backend.name(),
                "image": request.image,
                "caption": request.caption,
                "target_user_id": request.target_user_id,
            }),
        ));

        let (state, submission) = match self.backend.submit(mode, &request).await {
            Ok(text) => {
                let report = AnalysisReport {
                    mode,
                    outcome: parse_analysis(&text),
                };
                SubmissionEventLogger::log_event(SubmissionEvent::new(
                    submission_id,
                    mode,
                    SubmissionEventKind::Succeeded,
                    json!({
                        "complete": report.outcome.is_complete(),
                        "score": report.outcome.score,
                    }),
                ));
                (
                    SubmissionState::Succeeded {
                        report: report.clone(),
                    },
                    Submission::Succeeded(report),
                )
            }
            Err(err) => {
                let message = err.to_string();
                SubmissionEventLogger::log_event(SubmissionEvent::new(
                    submission_id,
                    mode,
                    SubmissionEventKind::Failed,
                    json!({ "error": message }),
                ));
                (
                    SubmissionState::Failed {
                        message: message.clone(),
                    },
                    Submission::Failed(message),
                )
            }
        };

        *self.state.write().await = state;
        info!(submission_id = %submission_id, mode = %mode, "Submission finished");
        Ok(submission)
    }

    fn ignored(&self, mode: AnalysisMode) -> Submission {
        SubmissionEventLogger::log_event(SubmissionEvent::new(
            Uuid::nil(),
            mode,
            SubmissionEventKind::Ignored,
            json!({ "reason": "submission already in flight" }),
        ));
        Submission::Ignored
    }
}
