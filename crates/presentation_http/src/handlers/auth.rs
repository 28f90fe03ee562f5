//! Sign-in handlers
//!
//! Sign-up and login are public; logout and session lookup run behind the
//! session layer and read the resolved `Session` from the request extensions.

use axum::{Extension, Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use domain::Session;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Credentials posted by the sign-in form
#[derive(Deserialize, Validate)]
pub struct CredentialsRequest {
    /// E-mail address, or a bare user ID when an identifier domain is configured
    #[validate(length(min = 1, max = 254, message = "must be between 1 and 254 characters"))]
    pub email: String,
    #[validate(length(min = 1, max = 1024, message = "must not be empty"))]
    pub password: String,
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl CredentialsRequest {
    fn into_parts(self) -> (String, SecretString) {
        (self.email, SecretString::from(self.password))
    }
}

/// A signed-in session as returned to the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub greeting: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        let display_name = session.display_name().to_string();
        Self {
            token: session.token.to_string(),
            user_id: session.user_id.to_string(),
            email: session.email.to_string(),
            greeting: format!("Welcome, {display_name}"),
            display_name,
            created_at: session.created_at,
        }
    }
}

/// Create an account and sign it in
///
/// POST /v1/auth/signup
#[instrument(skip(state, body))]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let (email, secret) = body.into_parts();
    let session = state.auth_service.signup(&email, &secret).await?;
    Ok((StatusCode::CREATED, Json(SessionResponse::from(&session))))
}

/// Sign in to an existing account
///
/// POST /v1/auth/login
#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CredentialsRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let (email, secret) = body.into_parts();
    let session = state.auth_service.login(&email, &secret).await?;
    Ok(Json(SessionResponse::from(&session)))
}

/// End the caller's session
///
/// POST /v1/auth/logout
#[instrument(skip(state, session))]
pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<StatusCode, ApiError> {
    state.auth_service.logout(&session.token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The caller's session, with the dashboard greeting
///
/// GET /v1/auth/session
pub async fn current_session(Extension(session): Extension<Session>) -> Json<SessionResponse> {
    Json(SessionResponse::from(&session))
}
