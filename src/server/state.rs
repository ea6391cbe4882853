/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The PostgreSQL connection pool
 * - The token service (signing secret and TTL, fixed at startup)
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`. This follows
 * Axum's recommended pattern for state management.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::tokens::TokenService;

/// Application state shared across all request handlers
///
/// Both fields are cheap to clone: the pool is an `Arc` internally and
/// the token service holds only the secret and TTL.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool, the only shared resource between requests
    pub pool: PgPool,
    /// JWT issue/verify service, constructed once from `ServerConfig`
    pub tokens: TokenService,
}

/// Allow handlers to extract `State<PgPool>` directly
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

/// Allow handlers to extract `State<TokenService>` directly
impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
