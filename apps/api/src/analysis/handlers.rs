//! Axum route handlers for the resume-analysis API.

use axum::extract::{Multipart, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::analysis::{fallback, interpreter, prompts};
use crate::errors::AppError;
use crate::extraction::{self, ExtractionError};
use crate::gemini_client::GeminiError;
use crate::models::report::{ResumeMetadata, ResumeReport};
use crate::models::request::{build_resume_request, AnalysisRequest, ResumeInput};
use crate::pipeline::invoke_with_fallback;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub is_fallback: bool,
    pub analysis: ResumeReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub success: bool,
    pub file_name: String,
    pub text: String,
    pub text_length: usize,
}

/// POST /api/v1/resumes/extract
///
/// Multipart upload → plain text via the extraction adapter. The UI calls
/// this first, then posts the extracted text to the analyze endpoint.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation("file", e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .unwrap_or("resume.pdf")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::validation("file", e.to_string()))?;

        let text = extraction::extract_text(&bytes, &file_name).map_err(map_extraction_error)?;
        let text_length = text.len();

        return Ok(Json(ExtractResponse {
            success: true,
            file_name,
            text,
            text_length,
        }));
    }

    Err(AppError::validation("file", "a 'file' multipart field is required"))
}

/// POST /api/v1/resumes/analyze
///
/// Validates extracted resume text, asks Gemini for a full review,
/// interprets the free-form response into scores, and on any configuration
/// or service failure substitutes the deterministic fallback analysis.
/// Recoverable degradation is always a 200.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(input): Json<ResumeInput>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let request = build_resume_request(input)?;
    let (text, file_name) = match &request {
        AnalysisRequest::Resume { text, file_name } => (text.clone(), file_name.clone()),
        AnalysisRequest::CareerGoals { .. } => unreachable!("built from resume input"),
    };

    let prompt = prompts::resume_analysis_prompt(&text);

    let live = async {
        let generated = state.gemini.generate(&prompt).await?;
        let scores = interpreter::interpret(&generated.text);
        Ok::<_, GeminiError>(ResumeReport {
            overall_score: scores.overall,
            full_analysis: generated.text,
            category_scores: scores.categories,
            metadata: ResumeMetadata {
                model: generated.model,
                token_usage: generated.token_usage,
                timestamp: Utc::now(),
                file_name: file_name.clone(),
                text_length: text.len(),
            },
        })
    };

    let (report, source) = invoke_with_fallback("resume analysis", live, || {
        fallback::generate_resume_fallback(&text, &file_name)
    })
    .await;

    state
        .activity
        .record("resume_analysis", Some(&report.metadata.file_name))
        .await;

    Ok(Json(AnalyzeResponse {
        success: true,
        is_fallback: source.is_fallback(),
        analysis: report,
    }))
}

fn map_extraction_error(e: ExtractionError) -> AppError {
    match e {
        ExtractionError::TooLarge => AppError::validation("file", e.to_string()),
        _ => AppError::UnprocessableEntity(e.to_string()),
    }
}
