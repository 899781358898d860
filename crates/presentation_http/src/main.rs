//! InSight Mars weather HTTP server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::MarsWeatherService;
use infrastructure::{AppConfig, InsightWeatherAdapter, init_telemetry};
use presentation_http::{ShutdownOutcome, cors_layer, create_router, serve_until, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_telemetry(&config.telemetry)?;

    info!("Mars weather service v{} starting...", env!("CARGO_PKG_VERSION"));

    if !config.insight.has_api_key() {
        warn!("NASA_API_KEY is not set, falling back to the rate-limited DEMO_KEY");
    }

    let adapter = InsightWeatherAdapter::with_config(config.insight.to_client_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize InSight client: {e}"))?;

    let state = AppState::new(MarsWeatherService::new(Arc::new(adapter)));

    // First added = innermost
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server));

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server is running on http://{addr}");
    info!("Now waiting for Mars weather fetch requests...");

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    match serve_until(listener, app, shutdown_signal(), shutdown_timeout).await? {
        ShutdownOutcome::Drained => info!("Server shutdown complete"),
        ShutdownOutcome::TimedOut => warn!("Server shutdown forced after drain timeout"),
    }

    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
