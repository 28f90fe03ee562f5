//! Route definitions

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::{handlers, middleware::SessionAuthLayer, state::AppState};

/// Create the main router with all routes
///
/// Everything except health, readiness, sign-up and login requires a session.
pub fn create_router(state: AppState) -> Router {
    let auth_layer = SessionAuthLayer::new(Arc::clone(&state.auth_service));
    let body_limit = DefaultBodyLimit::max(state.config.server.max_body_size_json_bytes);

    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Auth API (v1)
        .route("/v1/auth/signup", post(handlers::auth::signup))
        .route("/v1/auth/login", post(handlers::auth::login))
        .route("/v1/auth/logout", post(handlers::auth::logout))
        .route("/v1/auth/session", get(handlers::auth::current_session))
        // Fleet API (v1)
        .route("/v1/trains", get(handlers::trains::list_trains))
        .route("/v1/trains/refresh", post(handlers::trains::refresh_trains))
        .route("/v1/trains/{id}", get(handlers::trains::get_train))
        .route("/v1/trains/{id}/route", get(handlers::trains::get_route))
        .route("/v1/trains/{id}/halt", post(handlers::trains::halt_train))
        .route("/v1/trains/{id}/let-go", post(handlers::trains::let_go_train))
        .layer(body_limit)
        .layer(auth_layer)
        // Attach state
        .with_state(state)
}
