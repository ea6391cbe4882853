/**
 * Authentication Handler Types
 *
 * Request and response types for the signup and token endpoints.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
///
/// JSON body for `POST /signup`.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's chosen username (unique, case-sensitive)
    pub username: String,
    /// User's password (hashed before storage, never persisted as-is)
    pub password: String,
}

/// Token request
///
/// Form body for `POST /token`, mirroring the OAuth2 password flow.
#[derive(Deserialize, Serialize, Debug)]
pub struct TokenRequest {
    /// Username to authenticate as
    pub username: String,
    /// Password to verify against the stored hash
    pub password: String,
}

/// Token response
///
/// Returned by `POST /token` on successful authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Bearer token (JWT, 30-minute expiration)
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
}

/// Generic message response
///
/// Returned by endpoints whose success carries no data.
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}
