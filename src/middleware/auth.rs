/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * a bearer token. It extracts the token from the Authorization header,
 * verifies it, and attaches the subject to the request for handlers.
 *
 * Verification is pure: signature plus expiry against the fixed server
 * secret. The middleware does not consult the database; a subject that
 * has since vanished surfaces as `NotFound` from the store operation.
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data extracted from the verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    /// The token's subject claim
    pub username: String,
}

/// Extract the bearer token from request headers
///
/// Returns None if the Authorization header is missing, not valid
/// UTF-8, or not in `Bearer <token>` form.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches the subject to request extensions for handlers
///
/// Returns 401 Unauthorized if the token is missing, invalid, or
/// expired. Expired and invalid tokens are reported identically.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        ApiError::Unauthorized
    })?;

    let claims = app_state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Token rejected: {}", e);
        ApiError::Unauthorized
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        username: claims.sub,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter to pull the `AuthenticatedUser` the
/// middleware stored in request extensions.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::{HeaderValue, Request};

    #[test]
    fn test_bearer_token_present() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));
        assert_eq!(bearer_token(&headers), None);

        // Scheme is case-sensitive in this implementation, as in the
        // original server.
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer abc"));
        assert_eq!(bearer_token(&headers), None);
    }

    #[tokio::test]
    async fn test_extract_authenticated_user() {
        let (mut parts, _) = Request::builder()
            .uri("http://example.com/downloads")
            .body(())
            .unwrap()
            .into_parts();

        parts.extensions.insert(AuthenticatedUser {
            username: "alice".to_string(),
        });

        let AuthUser(user) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_extract_authenticated_user_missing() {
        let (mut parts, _) = Request::builder()
            .uri("http://example.com/downloads")
            .body(())
            .unwrap()
            .into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }
}
