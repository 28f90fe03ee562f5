//! Session authentication middleware
//!
//! Resolves the Bearer token in the Authorization header to a signed-in
//! [`Session`] through the [`AuthService`] and inserts it into the request
//! extensions. Handlers behind the layer take `Extension<Session>`.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use application::AuthService;
use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    response::{IntoResponse, Response},
};
use domain::{Session, SessionToken};
use tower::{Layer, Service};
use tracing::{debug, warn};

use crate::error::ApiError;

/// Paths reachable without a session
pub const PUBLIC_PATHS: [&str; 4] = ["/health", "/ready", "/v1/auth/login", "/v1/auth/signup"];

/// Layer that applies session authentication
#[derive(Clone)]
pub struct SessionAuthLayer {
    auth_service: Arc<AuthService>,
    excluded_paths: Vec<String>,
}

impl std::fmt::Debug for SessionAuthLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionAuthLayer")
            .field("excluded_paths", &self.excluded_paths)
            .finish_non_exhaustive()
    }
}

impl SessionAuthLayer {
    /// Create a layer that leaves the public paths open
    #[must_use]
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self {
            auth_service,
            excluded_paths: PUBLIC_PATHS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl<S> Layer<S> for SessionAuthLayer {
    type Service = SessionAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SessionAuth {
            inner,
            auth_service: Arc::clone(&self.auth_service),
            excluded_paths: self.excluded_paths.clone(),
        }
    }
}

/// Middleware service for session authentication
#[derive(Clone)]
pub struct SessionAuth<S> {
    inner: S,
    auth_service: Arc<AuthService>,
    excluded_paths: Vec<String>,
}

impl<S> std::fmt::Debug for SessionAuth<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionAuth")
            .field("excluded_paths", &self.excluded_paths)
            .finish_non_exhaustive()
    }
}

impl<S> Service<Request> for SessionAuth<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let auth_service = Arc::clone(&self.auth_service);
        let excluded_paths = self.excluded_paths.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let path = req.uri().path();
            if excluded_paths.iter().any(|p| path.starts_with(p.as_str())) {
                return inner.call(req).await;
            }

            let token = match bearer_token(&req) {
                Ok(token) => token,
                Err(message) => return Ok(unauthorized_response(message)),
            };

            match auth_service.current_session(&token).await {
                Ok(Some(session)) => {
                    debug!(user_id = %session.user_id, "Session resolved");
                    insert_session(&mut req, session);
                    inner.call(req).await
                },
                Ok(None) => Ok(unauthorized_response("Session expired or unknown")),
                Err(e) => {
                    warn!(error = %e, "Session lookup failed");
                    Ok(ApiError::from(e).into_response())
                },
            }
        })
    }
}

fn bearer_token(req: &Request) -> Result<SessionToken, &'static str> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or("Missing Authorization header")?
        .to_str()
        .map_err(|_| "Invalid Authorization header")?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(SessionToken::new)
        .ok_or("Invalid authorization format, expected Bearer token")
}

fn insert_session(req: &mut Request, session: Session) {
    req.extensions_mut().insert(session);
}

fn unauthorized_response(message: &str) -> Response {
    ApiError::Unauthorized(message.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{Extension, Router, body::Body, http::StatusCode, routing::get};
    use infrastructure::InMemoryIdentityProvider;
    use secrecy::SecretString;
    use tower::ServiceExt;

    use super::*;

    async fn test_handler() -> &'static str {
        "ok"
    }

    async fn whoami(Extension(session): Extension<Session>) -> String {
        session.display_name().to_string()
    }

    async fn setup() -> (Router, SessionToken) {
        let provider = Arc::new(InMemoryIdentityProvider::new(6, 8));
        let auth = Arc::new(AuthService::new(provider));
        let session = auth
            .signup("ops@rail.example", &SecretString::from("secret1".to_string()))
            .await
            .unwrap();

        let router = Router::new()
            .route("/whoami", get(whoami))
            .route("/health", get(test_handler))
            .layer(SessionAuthLayer::new(auth));
        (router, session.token)
    }

    fn get_with_auth(uri: &str, auth: Option<&str>) -> Request {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = auth {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn valid_session_injects_extension() {
        let (app, token) = setup().await;

        let response = app
            .oneshot(get_with_auth("/whoami", Some(&format!("Bearer {token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"ops");
    }

    #[tokio::test]
    async fn unknown_token_rejected() {
        let (app, _) = setup().await;
        let response = app
            .oneshot(get_with_auth("/whoami", Some("Bearer not-a-session")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_header_rejected() {
        let (app, _) = setup().await;
        let response = app.oneshot(get_with_auth("/whoami", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn non_bearer_scheme_rejected() {
        let (app, _) = setup().await;
        let response = app
            .oneshot(get_with_auth("/whoami", Some("Basic dXNlcjpwYXNz")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn health_endpoint_excluded_from_auth() {
        let (app, _) = setup().await;
        let response = app.oneshot(get_with_auth("/health", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn bearer_token_is_trimmed() {
        let req = get_with_auth("/", Some("Bearer  abc123 "));
        assert_eq!(bearer_token(&req).unwrap(), SessionToken::new("abc123"));

        let req = get_with_auth("/", Some("Bearer "));
        assert!(bearer_token(&req).is_err());
    }

    #[test]
    fn public_paths_cover_sign_in() {
        assert!(PUBLIC_PATHS.contains(&"/v1/auth/login"));
        assert!(PUBLIC_PATHS.contains(&"/v1/auth/signup"));
        assert!(!PUBLIC_PATHS.contains(&"/v1/auth/logout"));
    }
}
