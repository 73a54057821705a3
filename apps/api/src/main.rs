mod activity;
mod advice;
mod analysis;
mod config;
mod errors;
mod extraction;
mod gemini_client;
mod interview;
mod models;
mod pipeline;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::activity::LogActivityTracker;
use crate::config::Config;
use crate::gemini_client::GeminiClient;
use crate::interview::session::TavusClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Tracing targets use the underscored crate name, not the package name.
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Ascent API v{}", env!("CARGO_PKG_VERSION"));

    // Missing credentials are not an error: the service runs in fallback
    // mode and the deterministic generators answer instead.
    let gemini = GeminiClient::new(&config);
    info!(
        "Gemini client initialized (mode: {})",
        if gemini.is_configured() { "live" } else { "fallback" }
    );

    let tavus = TavusClient::new(&config);
    info!(
        "Tavus client initialized (mode: {})",
        if tavus.is_configured() { "live" } else { "mock" }
    );

    let state = AppState {
        gemini,
        tavus,
        activity: Arc::new(LogActivityTracker),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

    #[test]
    fn test_default_log_filter_enables_crate_target() {
        // The package name is hyphenated but tracing targets use the
        // underscored crate name, so the directive must be translated.
        let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
        let filter = EnvFilter::new(format!("{crate_target}=info"));
        let subscriber = tracing_subscriber::registry().with(filter);

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::event_enabled!(
                target: "ascent_api",
                Level::INFO
            ));
            assert!(tracing::event_enabled!(
                target: "ascent_api",
                Level::WARN
            ));
        });
    }
}
