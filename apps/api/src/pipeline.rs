//! The invoke-with-fallback combinator shared by every AI-backed feature.
//!
//! Pattern: try the live call, classify-and-log any failure, substitute the
//! deterministic local generator, never propagate the remote failure. The
//! caller always receives a usable value plus a marker saying which source
//! produced it.

use std::fmt::Display;
use std::future::Future;

use tracing::warn;

/// Which side of the live/fallback branch produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Live,
    Fallback,
}

impl Source {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Source::Fallback)
    }
}

/// Awaits `live`; on any error, logs it for operators and substitutes
/// `fallback()`. The fallback is a pure function of already-validated input
/// and cannot fail, so neither can this combinator.
pub async fn invoke_with_fallback<T, E, Fut, F>(what: &str, live: Fut, fallback: F) -> (T, Source)
where
    E: Display,
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce() -> T,
{
    match live.await {
        Ok(value) => (value, Source::Live),
        Err(e) => {
            warn!("{what}: live call failed, substituting fallback: {e}");
            (fallback(), Source::Fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_live_success_passes_through() {
        let (value, source) =
            invoke_with_fallback("test", async { Ok::<_, String>(42) }, || 0).await;
        assert_eq!(value, 42);
        assert_eq!(source, Source::Live);
    }

    #[tokio::test]
    async fn test_error_substitutes_fallback() {
        let (value, source) = invoke_with_fallback(
            "test",
            async { Err::<i32, _>("service unavailable".to_string()) },
            || 7,
        )
        .await;
        assert_eq!(value, 7);
        assert!(source.is_fallback());
    }

    #[tokio::test]
    async fn test_fallback_not_evaluated_on_success() {
        let (value, _) = invoke_with_fallback(
            "test",
            async { Ok::<_, String>("live") },
            || panic!("fallback must be lazy"),
        )
        .await;
        assert_eq!(value, "live");
    }
}
