/**
 * Login Handler
 *
 * This module implements credential login for POST /token.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue JWT with the username as subject
 *
 * # Security
 *
 * - An unknown username and a wrong password both produce the same
 *   401 `invalid credentials` response, so the endpoint cannot be used
 *   to enumerate usernames
 * - Password verification is constant-time within bcrypt
 * - Passwords are never logged or returned in responses
 */

use axum::{
    extract::{Form, State},
    response::Json,
};
use sqlx::PgPool;

use crate::auth::handlers::types::{TokenRequest, TokenResponse};
use crate::auth::passwords::verify_password;
use crate::auth::tokens::TokenService;
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;

/// Token issuance handler
///
/// Accepts form-encoded credentials (OAuth2 password flow shape) and
/// returns a bearer token on success.
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `State(tokens)` - Token service
/// * `Form(request)` - Form body with `username` and `password`
///
/// # Errors
///
/// * `401 Unauthorized` - unknown user or wrong password (indistinguishable)
/// * `500 Internal Server Error` - database or token encoding failure
///
/// # Example Response
///
/// ```json
/// {"access_token": "eyJhbGciOiJIUzI1NiIs...", "token_type": "bearer"}
/// ```
pub async fn issue_token(
    State(pool): State<PgPool>,
    State(tokens): State<TokenService>,
    Form(request): Form<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.username);

    let user = get_user_by_username(&pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed for: {}", request.username);
            ApiError::InvalidCredentials
        })?;

    if !verify_password(&request.password, &user.password_hash) {
        tracing::warn!("Login failed for: {}", request.username);
        return Err(ApiError::InvalidCredentials);
    }

    let access_token = tokens
        .issue(&user.username)
        .map_err(|e| ApiError::internal(format!("failed to issue token: {e}")))?;

    tracing::info!("User logged in: {}", user.username);

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
