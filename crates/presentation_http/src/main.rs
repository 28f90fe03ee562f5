//! Railwatch HTTP Server
//!
//! Main entry point for the section dashboard API.

use std::{sync::Arc, time::Duration};

use application::{AuthService, FleetService};
use infrastructure::{AppConfig, FixtureTrainSource, InMemoryIdentityProvider, init_tracing};
use presentation_http::{routes, server, set_expose_internal_errors, state::AppState, tasks};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before tracing so the log format can come from it.
    // A missing config.toml falls back to defaults; anything invalid is fatal.
    let config =
        AppConfig::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;

    let log_format = init_tracing(&config.server)?;

    info!("🚆 Railwatch v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        environment = %config.environment(),
        log_format = ?log_format,
        section = %config.fleet.section_name,
        "Configuration loaded"
    );

    set_expose_internal_errors(!config.is_production());

    // Initialize fleet
    let source = Arc::new(FixtureTrainSource::from_config(
        config.fleet.fixture_path.as_ref(),
    ));
    let fleet_service = FleetService::load(source)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load fleet: {e}"))?;
    info!(
        trains = fleet_service.len(),
        source = %fleet_service.source_description(),
        "Fleet loaded"
    );

    // Initialize identity provider
    let provider = InMemoryIdentityProvider::from_config(&config.auth)
        .map_err(|e| anyhow::anyhow!("Failed to initialize identity provider: {e}"))?;
    let mut auth_service = AuthService::new(Arc::new(provider));
    if let Some(domain) = &config.auth.identifier_domain {
        auth_service = auth_service.with_identifier_domain(domain.clone());
    }
    let auth_service = Arc::new(auth_service);

    let audit_handle = tasks::spawn_session_audit_task(&auth_service);

    let state = AppState {
        fleet_service: Arc::new(fleet_service),
        auth_service,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    server::serve(listener, app, shutdown_signal(), shutdown_timeout).await?;

    audit_handle.abort();
    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
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
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
