/**
 * Session Tokens
 *
 * This module handles JWT generation and validation. Tokens are
 * self-contained: there is no server-side session store, and validity
 * is determined solely by the HS256 signature and the expiry claim.
 *
 * The service is constructed once at startup from `ServerConfig`; the
 * signing secret is never read from the environment on the request
 * path and never rotated at runtime.
 */

use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the authenticated username
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Token verification errors
///
/// Both outcomes are terminal; a caller must not grant partial trust to
/// an expired-but-well-signed token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Signature valid but the token is past its expiry
    #[error("token expired")]
    Expired,
    /// Structural decode failure or signature mismatch
    #[error("invalid token")]
    Invalid,
}

/// JWT issue/verify service
///
/// Holds the signing secret and token lifetime, both fixed at startup.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl_secs: i64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The secret must never end up in logs.
        f.debug_struct("TokenService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a new token service
    ///
    /// # Arguments
    /// * `secret` - HMAC signing secret
    /// * `ttl_secs` - Token lifetime in seconds
    pub fn new(secret: impl Into<String>, ttl_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs,
        }
    }

    /// Issue a token for a subject
    ///
    /// Encodes `{sub, iat, exp = now + ttl}` signed with HS256.
    pub fn issue(&self, subject: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();
        let exp = (now as i64 + self.ttl_secs).max(0) as u64;

        let claims = Claims {
            sub: subject.to_string(),
            exp,
            iat: now,
        };

        let key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), &claims, &key)
    }

    /// Verify and decode a token
    ///
    /// The signature is checked first; any structural decode failure or
    /// signature mismatch yields `Invalid`. An otherwise-valid token past
    /// its expiry yields `Expired`. Zero leeway, so expiry is exact.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let key = DecodingKey::from_secret(self.secret.as_bytes());
        let mut validation = Validation::default();
        validation.leeway = 0;

        match decode::<Claims>(token, &key, &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(TokenError::Expired),
                _ => Err(TokenError::Invalid),
            },
        }
    }
}

/// Current Unix timestamp in seconds
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 30 * 60)
    }

    #[test]
    fn test_issue_token() {
        let token = service().issue("alice").unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_roundtrip() {
        let tokens = service();
        let token = tokens.issue("alice").unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_verify_garbage_is_invalid() {
        assert_eq!(
            service().verify("invalid.token.here"),
            Err(TokenError::Invalid)
        );
        assert_eq!(service().verify(""), Err(TokenError::Invalid));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = TokenService::new("secret-a", 30 * 60)
            .issue("alice")
            .unwrap();

        let result = TokenService::new("secret-b", 30 * 60).verify(&token);
        assert_eq!(result, Err(TokenError::Invalid));
    }

    #[test]
    fn test_expired_token() {
        // A negative TTL backdates the expiry, so the token is already stale.
        let token = TokenService::new("test-secret", -60).issue("alice").unwrap();

        let result = service().verify(&token);
        assert_eq!(result, Err(TokenError::Expired));
    }

    #[test]
    fn test_expired_beats_subject() {
        // Expiry is terminal even though the subject decodes fine.
        let token = TokenService::new("test-secret", -60).issue("bob").unwrap();
        assert!(service().verify(&token).is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let printed = format!("{:?}", service());
        assert!(!printed.contains("test-secret"));
    }
}
