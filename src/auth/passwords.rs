/**
 * Password Hashing
 *
 * bcrypt hashing and verification. The salt is embedded in the output
 * string and the cost factor is bcrypt's DEFAULT_COST.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password
///
/// Uses bcrypt with DEFAULT_COST; the salt is generated per call and
/// embedded in the returned hash string.
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Verify a plaintext password against a stored hash
///
/// Never errors: a malformed or truncated hash verifies as `false`
/// rather than surfacing a parse failure to the caller. Comparison is
/// constant-time within bcrypt.
pub fn verify_password(plaintext: &str, password_hash: &str) -> bool {
    match verify(plaintext, password_hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::debug!("password verification failed to parse hash: {:?}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = hash_password("password-one").unwrap();
        assert!(!verify_password("password-two", &hash));
    }

    #[test]
    fn test_salt_embedded_in_output() {
        // Two hashes of the same plaintext differ because the salt is fresh.
        let a = hash_password("same input").unwrap();
        let b = hash_password("same input").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("same input", &a));
        assert!(verify_password("same input", &b));
    }

    #[test]
    fn test_malformed_hash_returns_false() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
        assert!(!verify_password("anything", ""));
    }
}
