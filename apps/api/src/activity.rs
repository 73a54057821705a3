//! Activity tracking seam.
//!
//! Dashboard counters live in collaborator storage, not here. The core only
//! ever reports events through this interface — never through ambient
//! globals — so the collaborator can swap in a real upsert-backed tracker
//! without touching any feature code.

use async_trait::async_trait;
use tracing::info;

#[async_trait]
pub trait ActivityTracker: Send + Sync {
    async fn record(&self, kind: &str, detail: Option<&str>);
}

/// Default tracker: emits a structured log line per event. Durable counting
/// is the dashboard collaborator's concern.
pub struct LogActivityTracker;

#[async_trait]
impl ActivityTracker for LogActivityTracker {
    async fn record(&self, kind: &str, detail: Option<&str>) {
        match detail {
            Some(detail) => info!(activity = kind, detail, "activity recorded"),
            None => info!(activity = kind, "activity recorded"),
        }
    }
}
