/**
 * User Model and Store Operations
 *
 * This module defines the user row and the store operations that touch
 * it directly: creation and lookup. Download-list operations live in
 * `downloads::db`.
 *
 * # Uniqueness
 *
 * Username uniqueness is enforced at the store boundary with a single
 * atomic insert-or-reject statement. There is no separate existence
 * check, so two concurrent signups for the same name cannot both win.
 */

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User struct representing a row in the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID, assigned at creation, immutable)
    pub id: Uuid,
    /// Username (unique, case-sensitive, immutable after creation)
    pub username: String,
    /// Hashed password (bcrypt); never serialized into responses
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Ordered list of download URLs, append-only from the API's view
    pub downloads: Vec<String>,
}

/// Create a new user
///
/// Performs an atomic insert-or-reject: `ON CONFLICT (username) DO
/// NOTHING` with `RETURNING id` means a duplicate username yields no
/// row rather than an error, and at most one of any set of concurrent
/// inserts for the same name succeeds.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `password_hash` - Hashed password
///
/// # Returns
/// `Ok(Some(id))` on success, `Ok(None)` if the username is taken
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
) -> Result<Option<Uuid>, sqlx::Error> {
    let id = Uuid::new_v4();

    let inserted = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO users (id, username, password_hash, downloads)
        VALUES ($1, $2, $3, '{}')
        ON CONFLICT (username) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .fetch_optional(pool)
    .await?;

    Ok(inserted)
}

/// Get user by username
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Username (case-sensitive)
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, downloads
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
