/// Gemini Client — the single point of entry for all generative AI calls in
/// Ascent.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All generative interactions MUST go through this module.
///
/// Calls are routed through the Pica passthrough. Exactly one network call
/// per invocation — retries are the user's job (re-submit the action), not
/// this client's.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::report::TokenUsage;

const GEMINI_API_URL: &str =
    "https://api.picaos.com/v1/passthrough/models/gemini-1.5-flash:generateContent";
const PICA_ACTION_ID: &str = "conn_mod_def::GCmd5BQE388::PISTzTbvRSqXx0N0rMa-Lw";
/// Reported when the response omits its model version.
pub const MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Error)]
pub enum GeminiError {
    /// Deployment mis-configuration: a detectable precondition, distinct
    /// from any network failure. Lists the absent credential variables.
    #[error("Missing API credentials: {}", missing_keys.join(", "))]
    Config { missing_keys: Vec<String> },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI service error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The service answered but produced nothing useful (no candidates).
    #[error("AI service returned no generated candidates")]
    NoCandidates,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<TokenUsage>,
    #[serde(rename = "modelVersion")]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// A successful generation: raw text plus observability metadata.
#[derive(Debug, Clone)]
pub struct Generated {
    pub text: String,
    pub model: String,
    pub token_usage: TokenUsage,
}

/// Pica credential pair required for live mode.
#[derive(Debug, Clone)]
struct Credentials {
    secret_key: String,
    connection_key: String,
}

/// The single Gemini client used by the advice and analysis features.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    credentials: Option<Credentials>,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        let credentials = match (&config.pica_secret_key, &config.pica_gemini_connection_key) {
            (Some(secret_key), Some(connection_key)) => Some(Credentials {
                secret_key: secret_key.clone(),
                connection_key: connection_key.clone(),
            }),
            _ => None,
        };

        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            credentials,
        }
    }

    /// True when live credentials are configured. Used only for logging —
    /// callers rely on [`GeminiError::Config`] for the actual branch.
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Sends one generation request and classifies the outcome.
    ///
    /// Never panics and never leaks a raw transport error to the caller:
    /// every failure mode maps onto a [`GeminiError`] variant the pipeline
    /// can substitute with a fallback.
    pub async fn generate(&self, prompt: &str) -> Result<Generated, GeminiError> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            GeminiError::Config {
                missing_keys: self.missing_keys(),
            }
        })?;

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(GEMINI_API_URL)
            .header("content-type", "application/json")
            .header("x-pica-secret", &credentials.secret_key)
            .header("x-pica-connection-key", &credentials.connection_key)
            .header("x-pica-action-id", PICA_ACTION_ID)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {status}: {body}");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(GeminiError::Http)?;

        let text = payload
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .filter(|t| !t.is_empty())
            .ok_or(GeminiError::NoCandidates)?;

        let token_usage = payload.usage_metadata.unwrap_or(TokenUsage {
            prompt_token_count: 0,
            candidates_token_count: 0,
            total_token_count: 0,
        });

        debug!(
            "Gemini call succeeded: prompt_tokens={}, completion_tokens={}",
            token_usage.prompt_token_count, token_usage.candidates_token_count
        );

        Ok(Generated {
            text,
            model: payload.model_version.unwrap_or_else(|| MODEL.to_string()),
            token_usage,
        })
    }

    fn missing_keys(&self) -> Vec<String> {
        // Only reached when at least one key is absent; report both names so
        // operators can fix the deployment in one pass.
        vec![
            "PICA_SECRET_KEY".to_string(),
            "PICA_GEMINI_CONNECTION_KEY".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured_client() -> GeminiClient {
        let config = Config {
            pica_secret_key: None,
            pica_gemini_connection_key: None,
            tavus_api_key: None,
            tavus_persona_id: None,
            tavus_replica_id: None,
            port: 8080,
            rust_log: "info".to_string(),
        };
        GeminiClient::new(&config)
    }

    #[tokio::test]
    async fn test_missing_credentials_is_config_error_not_network() {
        let client = unconfigured_client();
        assert!(!client.is_configured());
        match client.generate("prompt").await {
            Err(GeminiError::Config { missing_keys }) => {
                assert!(missing_keys.contains(&"PICA_SECRET_KEY".to_string()));
            }
            other => panic!("Expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_credentials_still_unconfigured() {
        let config = Config {
            pica_secret_key: Some("sk".to_string()),
            pica_gemini_connection_key: None,
            tavus_api_key: None,
            tavus_persona_id: None,
            tavus_replica_id: None,
            port: 8080,
            rust_log: "info".to_string(),
        };
        assert!(!GeminiClient::new(&config).is_configured());
    }

    #[test]
    fn test_response_shape_with_candidates() {
        let payload: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{"content": {"parts": [{"text": "hello"}]}}],
                "usageMetadata": {
                    "promptTokenCount": 10,
                    "candidatesTokenCount": 20,
                    "totalTokenCount": 30
                },
                "modelVersion": "gemini-1.5-flash-002"
            }"#,
        )
        .unwrap();
        assert_eq!(payload.candidates[0].content.parts[0].text, "hello");
        assert_eq!(payload.usage_metadata.unwrap().total_token_count, 30);
        assert_eq!(payload.model_version.as_deref(), Some("gemini-1.5-flash-002"));
    }

    #[test]
    fn test_response_shape_missing_candidates_parses_empty() {
        // "service answered but produced nothing useful" must deserialize,
        // then fail as NoCandidates at the call site
        let payload: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert!(payload.candidates.is_empty());
    }
}
