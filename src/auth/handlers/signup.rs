/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /signup.
 *
 * # Registration Process
 *
 * 1. Reject empty username or password
 * 2. Hash password using bcrypt
 * 3. Insert user with atomic insert-or-reject semantics
 * 4. Return confirmation message
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt DEFAULT_COST before storage
 * - Duplicate detection happens inside the insert itself, so two
 *   concurrent signups for the same username cannot both succeed
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{MessageResponse, SignupRequest};
use crate::auth::passwords::hash_password;
use crate::auth::users::create_user;
use crate::error::ApiError;

/// Sign up handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Signup request containing username and password
///
/// # Errors
///
/// * `400 Bad Request` - empty username/password, or username already taken
/// * `500 Internal Server Error` - hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /signup HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "password": "pw1"}
/// ```
pub async fn signup(
    State(pool): State<PgPool>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    tracing::info!("Signup request for username: {}", request.username);

    if request.username.is_empty() {
        return Err(ApiError::malformed("username must not be empty"));
    }
    if request.password.is_empty() {
        return Err(ApiError::malformed("password must not be empty"));
    }

    let password_hash = hash_password(&request.password)
        .map_err(|e| ApiError::internal(format!("failed to hash password: {e}")))?;

    let user_id = create_user(&pool, &request.username, &password_hash)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Username already registered: {}", request.username);
            ApiError::DuplicateUsername
        })?;

    tracing::info!("User created: {} ({})", request.username, user_id);

    Ok(Json(MessageResponse {
        message: "User created successfully".to_string(),
    }))
}
