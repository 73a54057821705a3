//! Axum route handlers for the career-advice API.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::advice::{fallback, prompts};
use crate::errors::AppError;
use crate::gemini_client::GeminiError;
use crate::models::report::{AdviceMetadata, AdviceReport, EchoedAdviceInput};
use crate::models::request::{build_career_goals_request, AnalysisRequest, CareerGoalsInput};
use crate::pipeline::invoke_with_fallback;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceResponse {
    pub success: bool,
    pub is_fallback: bool,
    pub advice: String,
    pub metadata: AdviceMetadata,
}

/// POST /api/v1/advice
///
/// Validates the career-goals input, asks Gemini for coaching advice, and on
/// any configuration or service failure substitutes the deterministic
/// fallback coach. Recoverable degradation is always a 200.
pub async fn handle_advice(
    State(state): State<AppState>,
    Json(input): Json<CareerGoalsInput>,
) -> Result<Json<AdviceResponse>, AppError> {
    let request = build_career_goals_request(input)?;
    let (goals, experience_level, challenges) = match &request {
        AnalysisRequest::CareerGoals {
            goals,
            experience_level,
            challenges,
        } => (goals.clone(), *experience_level, challenges.clone()),
        AnalysisRequest::Resume { .. } => unreachable!("built from career-goals input"),
    };

    let prompt =
        prompts::career_advice_prompt(&goals, experience_level.as_str(), challenges.as_deref());

    let live = async {
        let generated = state.gemini.generate(&prompt).await?;
        Ok::<_, GeminiError>(AdviceReport {
            advice: generated.text,
            metadata: AdviceMetadata {
                model: generated.model,
                token_usage: generated.token_usage,
                timestamp: Utc::now(),
                user_input: EchoedAdviceInput {
                    career_goals: goals.clone(),
                    experience_level,
                    challenges: challenges.clone(),
                },
            },
        })
    };

    let (report, source) = invoke_with_fallback("career advice", live, || {
        fallback::generate_advice_fallback(&goals, experience_level, challenges.as_deref())
    })
    .await;

    state.activity.record("career_advice", None).await;

    Ok(Json(AdviceResponse {
        success: true,
        is_fallback: source.is_fallback(),
        advice: report.advice,
        metadata: report.metadata,
    }))
}
