//! Conversation session model for the mock-interview feature.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::interview::prompts;

/// Identifier prefix marking sessions that were provisioned locally and have
/// no remote counterpart. Ending such a session must never touch the network.
pub const MOCK_SESSION_PREFIX: &str = "mock_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Ended,
}

/// A provisioned, time-bounded video-interview session.
///
/// Invariant: `is_mock == true` iff `url == None` and the id carries
/// [`MOCK_SESSION_PREFIX`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSession {
    pub id: String,
    pub name: String,
    pub status: SessionStatus,
    pub url: Option<String>,
    pub is_mock: bool,
    pub created_at: DateTime<Utc>,
    pub replica_id: String,
    pub persona_id: String,
}

impl ConversationSession {
    /// Constructs a locally-provisioned session used whenever the remote
    /// conversational service is unavailable or unconfigured.
    pub fn mock(role: &str, candidate_name: &str) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        ConversationSession {
            id: format!(
                "{MOCK_SESSION_PREFIX}{}_{}",
                Utc::now().timestamp_millis(),
                &suffix[..9]
            ),
            name: prompts::conversation_name(role, candidate_name),
            status: SessionStatus::Active,
            url: None,
            is_mock: true,
            created_at: Utc::now(),
            replica_id: "mock_replica_id".to_string(),
            persona_id: "mock_persona_id".to_string(),
        }
    }
}

/// Returns true when the id was locally generated and therefore has no
/// remote resource to end.
pub fn is_mock_session_id(id: &str) -> bool {
    id.starts_with(MOCK_SESSION_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_session_has_prefix_and_no_url() {
        let session = ConversationSession::mock("Software Engineer", "Ada");
        assert!(session.is_mock);
        assert!(session.url.is_none());
        assert!(is_mock_session_id(&session.id));
        assert_eq!(session.status, SessionStatus::Active);
    }

    #[test]
    fn test_mock_session_name_matches_live_naming() {
        let session = ConversationSession::mock("Software Engineer", "Ada");
        assert_eq!(
            session.name,
            prompts::conversation_name("Software Engineer", "Ada")
        );
    }

    #[test]
    fn test_mock_ids_are_unique() {
        let a = ConversationSession::mock("X", "Y");
        let b = ConversationSession::mock("X", "Y");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_real_looking_id_is_not_mock() {
        assert!(!is_mock_session_id("c9f2a1b4e0d84"));
    }
}
