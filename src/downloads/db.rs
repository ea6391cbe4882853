/**
 * Download List Store Operations
 *
 * Database operations for the per-user download list.
 *
 * # Atomic Append
 *
 * The append is a single UPDATE using `array_append`, so PostgreSQL's
 * row-level locking serializes concurrent writers for the same user.
 * Two concurrent appends both land; neither overwrites the other. A
 * read-modify-write of the whole array would not have that property.
 */

use sqlx::PgPool;

/// Append a URL to a user's download list
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - The authenticated user (token subject)
/// * `url` - URL to append; duplicates are permitted
///
/// # Returns
/// `Ok(true)` if a row was updated, `Ok(false)` if the user does not exist
pub async fn append_download(
    pool: &PgPool,
    username: &str,
    url: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET downloads = array_append(downloads, $1)
        WHERE username = $2
        "#,
    )
    .bind(url)
    .bind(username)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Fetch a user's download list in append order
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - The authenticated user (token subject)
///
/// # Returns
/// The ordered URL list, or None if the user does not exist
pub async fn list_downloads(
    pool: &PgPool,
    username: &str,
) -> Result<Option<Vec<String>>, sqlx::Error> {
    let downloads = sqlx::query_scalar::<_, Vec<String>>(
        r#"
        SELECT downloads
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(downloads)
}
