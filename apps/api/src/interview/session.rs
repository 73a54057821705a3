/// Tavus Client — the single point of entry for conversational-video calls
/// in Ascent. Creates and ends conversation resources; mock/real branching
/// lives in the handlers via the shared fallback combinator.
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::interview::prompts;
use crate::models::request::ConversationRequest;
use crate::models::session::{ConversationSession, SessionStatus};

const TAVUS_API_URL: &str = "https://tavusapi.com/v2/conversations";

/// Interview sessions auto-terminate after 30 minutes.
const MAX_CALL_DURATION_SECS: u32 = 1800;
const PARTICIPANT_LEFT_TIMEOUT_SECS: u32 = 300;
const PARTICIPANT_ABSENT_TIMEOUT_SECS: u32 = 120;

#[derive(Debug, Error)]
pub enum TavusError {
    #[error("Missing API credentials: TAVUS_API_KEY")]
    Config,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Tavus API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct CreateConversationBody {
    conversation_name: String,
    conversational_context: String,
    custom_greeting: String,
    audio_only: bool,
    properties: ConversationProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    persona_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    replica_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct ConversationProperties {
    participant_left_timeout: u32,
    participant_absent_timeout: u32,
    enable_recording: bool,
    enable_transcription: bool,
    max_call_duration: u32,
    language: String,
}

#[derive(Debug, Deserialize)]
struct CreateConversationResponse {
    conversation_id: String,
    conversation_name: String,
    status: SessionStatus,
    conversation_url: String,
    replica_id: String,
    persona_id: String,
    created_at: DateTime<Utc>,
}

/// The single Tavus client used by the interview feature.
#[derive(Clone)]
pub struct TavusClient {
    client: Client,
    api_key: Option<String>,
    persona_id: Option<String>,
    replica_id: Option<String>,
}

impl TavusClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key: config.tavus_api_key.clone(),
            persona_id: config.tavus_persona_id.clone(),
            replica_id: config.tavus_replica_id.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Provisions a real conversation. Exactly one network call; every
    /// failure mode maps onto a [`TavusError`] the handler substitutes with
    /// a mock session.
    pub async fn create(
        &self,
        request: &ConversationRequest,
    ) -> Result<ConversationSession, TavusError> {
        let api_key = self.api_key.as_ref().ok_or(TavusError::Config)?;

        let body = CreateConversationBody {
            conversation_name: prompts::conversation_name(&request.role, &request.candidate_name),
            conversational_context: prompts::interview_context(
                &request.role,
                &request.candidate_name,
                request.custom_context.as_deref(),
            ),
            custom_greeting: prompts::custom_greeting(&request.role, &request.candidate_name),
            audio_only: false,
            properties: ConversationProperties {
                participant_left_timeout: PARTICIPANT_LEFT_TIMEOUT_SECS,
                participant_absent_timeout: PARTICIPANT_ABSENT_TIMEOUT_SECS,
                enable_recording: true,
                enable_transcription: true,
                max_call_duration: MAX_CALL_DURATION_SECS,
                language: "en".to_string(),
            },
            persona_id: self.persona_id.clone(),
            replica_id: self.replica_id.clone(),
        };

        let response = self
            .client
            .post(TAVUS_API_URL)
            .header("x-api-key", api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Tavus create returned {status}: {message}");
            return Err(TavusError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: CreateConversationResponse = response.json().await.map_err(TavusError::Http)?;
        debug!("Tavus conversation created: {}", payload.conversation_id);

        Ok(ConversationSession {
            id: payload.conversation_id,
            name: payload.conversation_name,
            status: payload.status,
            url: Some(payload.conversation_url),
            is_mock: false,
            created_at: payload.created_at,
            replica_id: payload.replica_id,
            persona_id: payload.persona_id,
        })
    }

    /// Ends a real conversation. Any 2xx counts as success regardless of
    /// body shape — empty, non-JSON, or a status object — because teardown
    /// is best-effort, not a strict contract. Without credentials there is
    /// no remote resource worth failing over, so the call degrades to a
    /// logged no-op.
    pub async fn end(&self, conversation_id: &str) -> Result<(), TavusError> {
        let api_key = match &self.api_key {
            Some(key) => key,
            None => {
                warn!("Ending conversation {conversation_id} with no Tavus credentials; treating as a no-op");
                return Ok(());
            }
        };

        let response = self
            .client
            .post(format!("{TAVUS_API_URL}/{conversation_id}/end"))
            .header("x-api-key", api_key)
            .header("content-type", "application/json")
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Tavus end returned {status}: {message}");
            return Err(TavusError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // Body deliberately ignored.
        debug!("Tavus conversation ended: {conversation_id}");
        Ok(())
    }
}
