//! Axum route handlers for the mock-interview API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::request::{build_conversation_request, InterviewInput};
use crate::models::session::{is_mock_session_id, ConversationSession};
use crate::pipeline::invoke_with_fallback;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub success: bool,
    pub is_mock_mode: bool,
    pub conversation: ConversationSession,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndSessionResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/v1/interviews
///
/// Provisions a conversation for the requested role. Whenever the remote
/// service is unconfigured or the creation call fails, the caller still
/// receives a usable session — a mock one with `url = null` and a
/// recognizable id prefix.
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(input): Json<InterviewInput>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    let request = build_conversation_request(input)?;

    let (session, _) = invoke_with_fallback(
        "interview session",
        state.tavus.create(&request),
        || ConversationSession::mock(&request.role, &request.candidate_name),
    )
    .await;

    state
        .activity
        .record("mock_interview", Some(&request.role))
        .await;

    Ok(Json(CreateSessionResponse {
        success: true,
        is_mock_mode: session.is_mock,
        conversation: session,
    }))
}

/// POST /api/v1/interviews/:id/end
///
/// Ends a session. Mock ids never touch the network and always report
/// success, so ending twice is safe; real ids issue the remote end call,
/// which tolerates any 2xx body shape.
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<EndSessionResponse>, AppError> {
    if session_id.trim().is_empty() {
        return Err(AppError::validation(
            "conversationId",
            "conversationId is required",
        ));
    }

    if is_mock_session_id(&session_id) {
        return Ok(Json(EndSessionResponse {
            success: true,
            message: "Mock conversation ended".to_string(),
        }));
    }

    state
        .tavus
        .end(&session_id)
        .await
        .map_err(|e| AppError::Service(format!("Unable to end conversation: {e}")))?;

    Ok(Json(EndSessionResponse {
        success: true,
        message: "Conversation ended successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::activity::LogActivityTracker;
    use crate::config::Config;
    use crate::gemini_client::GeminiClient;
    use crate::interview::session::TavusClient;

    fn unconfigured_state() -> AppState {
        let config = Config {
            pica_secret_key: None,
            pica_gemini_connection_key: None,
            tavus_api_key: None,
            tavus_persona_id: None,
            tavus_replica_id: None,
            port: 8080,
            rust_log: "info".to_string(),
        };
        AppState {
            gemini: GeminiClient::new(&config),
            tavus: TavusClient::new(&config),
            activity: Arc::new(LogActivityTracker),
        }
    }

    #[tokio::test]
    async fn test_ending_mock_session_twice_succeeds() {
        let state = unconfigured_state();
        let id = "mock_1700000000000_abc123def".to_string();

        for _ in 0..2 {
            let response = handle_end_session(
                State(state.clone()),
                Path(id.clone()),
            )
            .await
            .unwrap();
            assert!(response.success);
            assert_eq!(response.message, "Mock conversation ended");
        }
    }

    #[tokio::test]
    async fn test_ending_blank_session_id_is_rejected() {
        let state = unconfigured_state();
        let result = handle_end_session(State(state), Path("  ".to_string())).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
