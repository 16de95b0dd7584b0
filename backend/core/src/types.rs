use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Public SafePost analysis host.
pub const DEFAULT_BASE_URL: &str = "https://safepost.onrender.com";

/// Shown in place of the summary when a response could not be fully parsed.
pub const FALLBACK_MESSAGE: &str = "결과를 불러올 수 없습니다.";

/// Which analysis the form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Caption-only post analysis.
    #[default]
    Analyze,
    /// Risk assessment relative to a target/follower identifier.
    Risk,
}

impl AnalysisMode {
    /// Path appended to the service base URL.
    pub fn endpoint_path(self) -> &'static str {
        match self {
            Self::Analyze => "/analyze",
            Self::Risk => "/risk_assess",
        }
    }

    /// JSON field holding the result text in a successful response.
    pub fn result_field(self) -> &'static str {
        match self {
            Self::Analyze => "result",
            Self::Risk => "risk_assessment",
        }
    }

    /// Error text used when a failed response carries no `error` field.
    pub fn failure_fallback(self) -> &'static str {
        match self {
            Self::Analyze => "분석 실패",
            Self::Risk => "리스크 평가 실패",
        }
    }

    pub fn requires_target(self) -> bool {
        matches!(self, Self::Risk)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Analyze => "기본 분석",
            Self::Risk => "지인 리스크 평가",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Analyze => "✨ 분석하기",
            Self::Risk => "🔍 위험도 평가하기",
        }
    }

    pub fn loading_label(self) -> &'static str {
        match self {
            Self::Analyze => "분석 중...",
            Self::Risk => "평가 중...",
        }
    }

    pub fn result_heading(self) -> &'static str {
        match self {
            Self::Analyze => "📊 분석 결과",
            Self::Risk => "🔍 지인 리스크 평가 결과",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Analyze => write!(f, "analyze"),
            Self::Risk => write!(f, "risk"),
        }
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "analyze" => Ok(Self::Analyze),
            "risk" | "risk_assess" => Ok(Self::Risk),
            other => Err(format!("unknown analysis mode '{other}'; use 'analyze' or 'risk'")),
        }
    }
}

/// An accepted image, base64 encoded, with its preview data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedImage {
    pub mime_type: String,
    /// Standard base64 without the data-URL prefix. This is the wire payload.
    pub base64: String,
    pub data_url: String,
}

impl EncodedImage {
    pub fn new(mime_type: impl Into<String>, base64: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        let base64 = base64.into();
        let data_url = format!("data:{mime_type};base64,{base64}");
        Self {
            mime_type,
            base64,
            data_url,
        }
    }
}

/// The user-supplied image plus caption and target identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Upload {
    pub image: Option<EncodedImage>,
    pub caption: String,
    pub target_id: String,
}

impl Upload {
    pub fn has_image(&self) -> bool {
        self.image
            .as_ref()
            .map(|img| !img.base64.is_empty())
            .unwrap_or(false)
    }
}

/// JSON body posted to the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub image: String,
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_user_id: Option<String>,
}

impl AnalysisRequest {
    /// Build the request body for `mode`, enforcing the pre-submit checks.
    pub fn from_upload(mode: AnalysisMode, upload: &Upload) -> Result<Self, ValidationError> {
        let image = match &upload.image {
            Some(img) if !img.base64.is_empty() => img.base64.clone(),
            _ => return Err(ValidationError::MissingImage),
        };

        let target_user_id = if mode.requires_target() {
            if upload.target_id.trim().is_empty() {
                return Err(ValidationError::MissingTargetId);
            }
            Some(upload.target_id.clone())
        } else {
            None
        };

        Ok(Self {
            image,
            caption: upload.caption.clone(),
            target_user_id,
        })
    }
}

/// Parsed result of a completed analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub raw_text: String,
    pub score: Option<u8>,
    pub warning: Option<String>,
    pub recommendation: Option<String>,
}

impl AnalysisOutcome {
    /// All three fields parsed, with non-empty warning and recommendation.
    pub fn is_complete(&self) -> bool {
        self.score.is_some()
            && self.warning.as_deref().is_some_and(|w| !w.is_empty())
            && self.recommendation.as_deref().is_some_and(|r| !r.is_empty())
    }

    /// The three-line summary, only when the outcome is complete.
    pub fn summary(&self) -> Option<String> {
        if !self.is_complete() {
            return None;
        }
        let (score, warning, recommendation) = (
            self.score?,
            self.warning.as_deref()?,
            self.recommendation.as_deref()?,
        );
        Some(format!(
            "📊 이 게시물은 {score}% 확률로 안전합니다.\n🛑 경고: {warning}\n✨ 추천: {recommendation}"
        ))
    }

    /// Text shown for this outcome in `mode`.
    ///
    /// Analyze mode is all-or-nothing: the summary or [`FALLBACK_MESSAGE`].
    /// Risk mode shows the raw response.
    pub fn display_text(&self, mode: AnalysisMode) -> String {
        match mode {
            AnalysisMode::Analyze => self
                .summary()
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
            AnalysisMode::Risk => self.raw_text.clone(),
        }
    }
}
