//! Middleware Module
//!
//! Request-processing middleware. Currently only bearer-token
//! authentication for the guarded download routes.

/// Bearer-token authentication middleware
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
