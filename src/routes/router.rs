/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * route registration with the cross-cutting layers.
 *
 * # Layers
 *
 * - Permissive CORS (any origin, method, header), matching the
 *   wide-open policy the API has always shipped with
 * - Fallback handler returning 404 for unknown routes
 */

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the pool and token service
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = configure_api_routes(Router::new(), &app_state);

    router
        .layer(cors)
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(app_state)
}
