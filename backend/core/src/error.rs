use thiserror::Error;

/// Client-side validation failures. These block a submission before any
/// state is touched or any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("이미지를 업로드해주세요.")]
    MissingImage,

    #[error("지인 ID를 입력해주세요.")]
    MissingTargetId,

    /// Carries the rejected MIME type for diagnostics.
    #[error("JPG 또는 PNG 이미지만 업로드 가능합니다.")]
    UnsupportedType(String),

    #[error("image file is empty")]
    EmptyImage,

    #[error("invalid data URL: {0}")]
    InvalidDataUrl(String),
}

/// Failures talking to the remote analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Non-2xx response. `message` is the server's `error` field or the
    /// mode's generic fallback.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    InvalidBody(String),

    #[error("response is missing the `{0}` field")]
    MissingField(&'static str),
}

/// Top-level error type for SafePost.
#[derive(Debug, Error)]
pub enum SafePostError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SafePostError {
    /// Whether this error came from client-side validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_message_verbatim() {
        let err = RequestError::Server {
            status: 400,
            message: "이미지 형식 오류".into(),
        };
        assert_eq!(err.to_string(), "이미지 형식 오류");
    }

    #[test]
    fn unsupported_type_uses_alert_copy() {
        let err = ValidationError::UnsupportedType("image/gif".into());
        assert_eq!(err.to_string(), "JPG 또는 PNG 이미지만 업로드 가능합니다.");
    }

    #[test]
    fn validation_wraps_transparently() {
        let err: SafePostError = ValidationError::MissingImage.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "이미지를 업로드해주세요.");
    }
}
