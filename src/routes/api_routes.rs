/**
 * API Route Handlers
 *
 * This module registers the API endpoints:
 *
 * # Routes
 *
 * ## Public
 * - `POST /signup` - User registration
 * - `POST /token` - Credential login, returns a bearer token
 *
 * ## Guarded (bearer token required)
 * - `POST /download` - Record a downloaded URL
 * - `GET /downloads` - List recorded URLs in append order
 *
 * The guarded routes sit behind `auth_middleware`, which verifies the
 * token before any handler runs. Handlers then read the authenticated
 * identity from request extensions; client-supplied usernames are never
 * trusted for these operations.
 */

use axum::Router;

use crate::auth::{issue_token, signup};
use crate::downloads::{list_downloads, save_download};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `state` - Application state, needed to construct the auth layer
///
/// # Returns
///
/// Router with public and guarded routes configured
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let guarded = Router::new()
        .route("/download", axum::routing::post(save_download))
        .route("/downloads", axum::routing::get(list_downloads))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    router
        .route("/signup", axum::routing::post(signup))
        .route("/token", axum::routing::post(issue_token))
        .merge(guarded)
}
