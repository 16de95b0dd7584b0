//! `analyze`, `risk`, and `check`: drive one form submission from the
//! command line.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use safepost_config::SafePostConfig;
use safepost_core::{AnalysisMode, SafePostError, Submission};
use safepost_media::read_selection;
use safepost_understanding::{AnalysisForm, HttpAnalysisClient};

use crate::terminal_output::{note_error, note_info, note_success, note_warn, render_report};

/// Exit status for input the form refused before sending anything.
const EXIT_INVALID_INPUT: u8 = 2;
const EXIT_FAILED: u8 = 1;

#[derive(Args)]
pub struct SubmitArgs {
    /// JPEG or PNG image path, or a `data:image/...;base64,` URL
    pub image: String,

    /// Post caption
    #[arg(short, long, default_value = "")]
    pub caption: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(
    config: &SafePostConfig,
    mode: AnalysisMode,
    target: Option<String>,
    args: SubmitArgs,
) -> Result<ExitCode> {
    let client = HttpAnalysisClient::new().with_base_url(config.base_url());
    let form = AnalysisForm::new(mode, Arc::new(client));

    let result = submit(&form, mode, target, &args).await;
    let status = exit_status(&result);
    match result {
        Ok(Submission::Succeeded(report)) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_report(&report));
            }
        }
        Ok(Submission::Failed(message)) => note_error(&format!("⚠️ {message}")),
        Ok(Submission::Ignored) => note_warn("A submission is already in progress"),
        Err(e) if e.is_validation() => note_error(&e.to_string()),
        Err(e) => return Err(e.into()),
    }
    Ok(ExitCode::from(status))
}

/// Select the image, fill in the form and submit it.
async fn submit(
    form: &AnalysisForm,
    mode: AnalysisMode,
    target: Option<String>,
    args: &SubmitArgs,
) -> Result<Submission, SafePostError> {
    let encoded = if args.image.starts_with("data:") {
        form.select_data_url(&args.image).await?
    } else {
        let file = read_selection(Path::new(&args.image)).await?;
        let encoded = form.select_image(&file).await?;
        note_success(&format!("이미지 선택 완료 ({})", file.name));
        encoded
    };
    debug!(mime = %encoded.mime_type, "Image selected");

    form.set_caption(args.caption.clone()).await;
    if let Some(target) = target {
        form.set_target_id(target).await;
    }

    if !args.json {
        note_info(mode.loading_label());
    }
    Ok(form.submit().await?)
}

/// Process exit status for a submission result.
fn exit_status(result: &Result<Submission, SafePostError>) -> u8 {
    match result {
        Ok(Submission::Succeeded(_)) => 0,
        Ok(Submission::Failed(_) | Submission::Ignored) => EXIT_FAILED,
        Err(e) if e.is_validation() => EXIT_INVALID_INPUT,
        Err(_) => EXIT_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safepost_core::{AnalysisOutcome, AnalysisReport, ValidationError};
    use safepost_understanding::MockBackend;

    fn args(image: &str) -> SubmitArgs {
        SubmitArgs {
            image: image.to_string(),
            caption: String::new(),
            json: true,
        }
    }

    #[test]
    fn exit_status_per_outcome() {
        let report = AnalysisReport {
            mode: AnalysisMode::Analyze,
            outcome: AnalysisOutcome {
                raw_text: String::new(),
                score: None,
                warning: None,
                recommendation: None,
            },
        };
        assert_eq!(exit_status(&Ok(Submission::Succeeded(report))), 0);
        assert_eq!(exit_status(&Ok(Submission::Failed("분석 실패".into()))), 1);
        assert_eq!(exit_status(&Ok(Submission::Ignored)), 1);
        assert_eq!(exit_status(&Err(ValidationError::MissingImage.into())), 2);
        assert_eq!(exit_status(&Err(anyhow::anyhow!("disk gone").into())), 1);
    }

    #[tokio::test]
    async fn data_url_argument_is_submitted() {
        let backend = Arc::new(MockBackend::new().with_response("위험도: 낮음"));
        let form = AnalysisForm::new(AnalysisMode::Risk, backend.clone());

        let result = submit(
            &form,
            AnalysisMode::Risk,
            Some("friend_01".into()),
            &args("data:image/png;base64,iVBORw0KGgo="),
        )
        .await;
        assert!(matches!(result, Ok(Submission::Succeeded(_))));
        assert_eq!(backend.calls().await[0].1.image, "iVBORw0KGgo=");
    }

    #[tokio::test]
    async fn risk_without_target_exits_with_invalid_input() {
        let backend = Arc::new(MockBackend::new());
        let form = AnalysisForm::new(AnalysisMode::Risk, backend.clone());

        let result = submit(
            &form,
            AnalysisMode::Risk,
            None,
            &args("data:image/png;base64,iVBORw0KGgo="),
        )
        .await;
        assert_eq!(exit_status(&result), EXIT_INVALID_INPUT);
        assert_eq!(backend.call_count().await, 0);
    }

    #[tokio::test]
    async fn unsupported_data_url_exits_with_invalid_input() {
        let form = AnalysisForm::new(AnalysisMode::Analyze, Arc::new(MockBackend::new()));
        let gif = args("data:image/gif;base64,AQID");
        let result = submit(&form, AnalysisMode::Analyze, None, &gif).await;
        assert_eq!(exit_status(&result), EXIT_INVALID_INPUT);
    }
}
