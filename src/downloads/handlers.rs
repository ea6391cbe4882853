/**
 * Download Handlers
 *
 * Guarded handlers for recording and listing a user's downloaded URLs.
 * Both run behind the bearer-token middleware; the identity is always
 * the verified token subject, never a client-supplied username.
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::handlers::types::MessageResponse;
use crate::downloads::db;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Download request
///
/// JSON body for `POST /download`.
#[derive(Deserialize, Serialize, Debug)]
pub struct DownloadRequest {
    /// URL that was downloaded
    pub url: String,
}

/// Downloads response
///
/// Returned by `GET /downloads`.
#[derive(Serialize, Deserialize, Debug)]
pub struct DownloadsResponse {
    /// URLs in append order
    pub downloads: Vec<String>,
}

/// Save a downloaded URL against the authenticated user
///
/// # Errors
///
/// * `400 Bad Request` - the token subject no longer exists in the store
/// * `401 Unauthorized` - handled by the middleware before this runs
/// * `500 Internal Server Error` - database failure
pub async fn save_download(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<DownloadRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    tracing::info!("Saving download for user: {}", user.username);

    let appended = db::append_download(&pool, &user.username, &request.url).await?;
    if !appended {
        tracing::warn!("User vanished after token issue: {}", user.username);
        return Err(ApiError::NotFound);
    }

    Ok(Json(MessageResponse {
        message: "Download URL saved successfully".to_string(),
    }))
}

/// List the authenticated user's downloaded URLs in append order
///
/// # Errors
///
/// * `400 Bad Request` - the token subject no longer exists in the store
/// * `401 Unauthorized` - handled by the middleware before this runs
/// * `500 Internal Server Error` - database failure
pub async fn list_downloads(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<DownloadsResponse>, ApiError> {
    let downloads = db::list_downloads(&pool, &user.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User vanished after token issue: {}", user.username);
            ApiError::NotFound
        })?;

    Ok(Json(DownloadsResponse { downloads }))
}
