/**
 * Server Initialization
 *
 * This module assembles the application state and router. Configuration
 * loading, pool creation, and migrations happen before this point (see
 * `server::config` and `main.rs`), so `create_app` itself is pure
 * assembly and cannot fail.
 */

use axum::Router;
use sqlx::PgPool;

use crate::auth::tokens::TokenService;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Server configuration loaded at startup
/// * `pool` - Connected PostgreSQL pool with migrations already applied
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(config: &ServerConfig, pool: PgPool) -> Router<()> {
    let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_secs);

    let app_state = AppState { pool, tokens };

    tracing::info!("Application state initialized");

    create_router(app_state)
}
