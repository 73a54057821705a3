use std::sync::Arc;

use crate::activity::ActivityTracker;
use crate::gemini_client::GeminiClient;
use crate::interview::session::TavusClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Each request operates on its own values; nothing here is
/// mutable. The clients own their credentials, so the raw config stays in
/// `main`.
#[derive(Clone)]
pub struct AppState {
    pub gemini: GeminiClient,
    pub tavus: TavusClient,
    /// Pluggable activity-event sink. Default: log-only tracker; the
    /// dashboard collaborator can swap in an upsert-backed one.
    pub activity: Arc<dyn ActivityTracker>,
}
