use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// External-service credentials are deliberately optional: their absence is
/// the switch between live mode and fallback mode, never a startup failure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pica passthrough secret for the Gemini capability.
    pub pica_secret_key: Option<String>,
    /// Pica connection identifier for the Gemini capability.
    pub pica_gemini_connection_key: Option<String>,
    /// Tavus conversational-video API key.
    pub tavus_api_key: Option<String>,
    pub tavus_persona_id: Option<String>,
    pub tavus_replica_id: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            pica_secret_key: optional_env("PICA_SECRET_KEY"),
            pica_gemini_connection_key: optional_env("PICA_GEMINI_CONNECTION_KEY"),
            tavus_api_key: optional_env("TAVUS_API_KEY"),
            tavus_persona_id: optional_env("TAVUS_PERSONA_ID"),
            tavus_replica_id: optional_env("TAVUS_REPLICA_ID"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// An empty string in the deployment environment must behave exactly like an
/// absent key, so both map to `None`.
fn optional_env(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}
