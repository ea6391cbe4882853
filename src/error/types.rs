/**
 * API Error Types
 *
 * This module defines the error taxonomy for the API. Each variant maps
 * 1:1 to a client-facing status code and message; no error is retried or
 * silently swallowed.
 *
 * # Error Categories
 *
 * - `DuplicateUsername` - signup with a username that already exists
 * - `InvalidCredentials` - login with an unknown user or wrong password
 *   (the two cases are deliberately indistinguishable to the caller)
 * - `Unauthorized` - missing, malformed, invalid, or expired bearer token
 * - `NotFound` - the token subject no longer exists in the store
 * - `Malformed` - a request body that fails validation
 * - `Database` / `Internal` - server-side failures, reported generically
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error type
///
/// Credential and token errors carry fixed messages so that responses
/// never leak which part of a check failed. Database and internal errors
/// keep their detail server-side; clients see a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Signup attempted with a username that already exists
    #[error("username already registered")]
    DuplicateUsername,

    /// Login failed; unknown user and wrong password are not distinguished
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Bearer token missing, invalid, or expired
    #[error("could not validate credentials")]
    Unauthorized,

    /// The authenticated user no longer exists in the store
    #[error("user not found")]
    NotFound,

    /// Request body failed validation
    #[error("malformed request: {message}")]
    Malformed {
        /// Human-readable description of what was wrong
        message: String,
    },

    /// Database failure; surfaced to clients as a generic server error
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Other server-side failure (hashing, token encoding)
    #[error("internal server error")]
    Internal {
        /// Server-side detail, logged but never sent to clients
        message: String,
    },
}

impl ApiError {
    /// Create a new malformed-request error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `DuplicateUsername`, `NotFound`, `Malformed` - 400 Bad Request
    /// - `InvalidCredentials`, `Unauthorized` - 401 Unauthorized
    /// - `Database`, `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateUsername | Self::NotFound | Self::Malformed { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Server-side variants collapse to a generic message; their detail
    /// is logged when the response is built.
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal { .. } => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::DuplicateUsername.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::malformed("empty username").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_errors_stay_generic() {
        let err = ApiError::internal("bcrypt cost out of range");
        assert_eq!(err.public_message(), "internal server error");
        assert!(!err.public_message().contains("bcrypt"));

        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.public_message(), "internal server error");
    }

    #[test]
    fn test_credential_errors_share_no_detail() {
        // Unknown user and wrong password must read identically.
        assert_eq!(
            ApiError::InvalidCredentials.public_message(),
            "invalid credentials"
        );
    }

    #[test]
    fn test_malformed_message() {
        let err = ApiError::malformed("username must not be empty");
        assert!(err.public_message().contains("username must not be empty"));
    }
}
