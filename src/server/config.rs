/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration,
 * plus creation of the PostgreSQL connection pool and the explicit
 * migration step run at startup.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables once at process
 * start and carried in an explicit `ServerConfig` struct. Nothing on
 * the request path reads the environment.
 *
 * # Error Handling
 *
 * Unlike optional services, the database is required: a missing
 * `DATABASE_URL` or an unreachable server is a startup failure, not a
 * degraded mode.
 */

use sqlx::PgPool;
use thiserror::Error;

/// Default token lifetime in minutes
const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Server configuration, constructed once at process start
///
/// The config is passed by reference into the token service and pool
/// constructors; handlers never consult process globals.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Secret used to sign and verify JWTs (never rotated at runtime)
    pub jwt_secret: String,
    /// Port the HTTP server binds to
    pub port: u16,
    /// Token lifetime in seconds
    pub token_ttl_secs: i64,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// # Environment Variables
    ///
    /// * `DATABASE_URL` - required, PostgreSQL connection string
    /// * `JWT_SECRET` - required, token signing secret
    /// * `SERVER_PORT` - optional, defaults to 3000
    /// * `TOKEN_TTL_MINUTES` - optional, defaults to 30
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing or a
    /// numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingValue("DATABASE_URL"))?;

        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingValue("JWT_SECRET"))?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value: raw,
            })?,
            Err(_) => 3000,
        };

        let token_ttl_secs = match std::env::var("TOKEN_TTL_MINUTES") {
            Ok(raw) => {
                let minutes = raw.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                    name: "TOKEN_TTL_MINUTES",
                    value: raw,
                })?;
                minutes * 60
            }
            Err(_) => DEFAULT_TOKEN_TTL_MINUTES * 60,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            token_ttl_secs,
        })
    }
}

/// Create the PostgreSQL connection pool
///
/// The pool is the only shared resource between requests: connections
/// are acquired per request and released on completion regardless of
/// success or failure.
pub async fn connect_pool(config: &ServerConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created");
    Ok(pool)
}

/// Run database migrations
///
/// Idempotent schema creation, run explicitly at startup before the
/// server begins serving requests. A migration failure is fatal.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingValue("DATABASE_URL");
        assert!(err.to_string().contains("DATABASE_URL"));

        let err = ConfigError::InvalidValue {
            name: "SERVER_PORT",
            value: "not-a-port".to_string(),
        };
        assert!(err.to_string().contains("SERVER_PORT"));
        assert!(err.to_string().contains("not-a-port"));
    }
}
