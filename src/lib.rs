//! DLVault - Main Library
//!
//! DLVault is a small authenticated backend built with Axum and PostgreSQL.
//! Users register with a username and password, exchange their credentials
//! for a bearer token, and record the URLs they have downloaded against
//! their account.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, server initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - User store, password hashing, JWT tokens, auth handlers
//! - **`downloads`** - Per-user download list storage and handlers
//! - **`middleware`** - Bearer-token authentication middleware
//! - **`error`** - API error types and HTTP response conversion
//!
//! # Authentication Flow
//!
//! 1. **Signup**: `POST /signup` with username and password - password is
//!    bcrypt-hashed and the user row is created
//! 2. **Login**: `POST /token` with form credentials - returns a JWT bearer
//!    token valid for 30 minutes
//! 3. **Guarded requests**: `POST /download` and `GET /downloads` require
//!    the bearer token; the token subject identifies the user
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never logged
//! - Tokens are stateless HS256 JWTs; validity is signature + expiry only
//! - Login failures never reveal whether the username or password was wrong

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication: user store, password hashing, tokens, handlers
pub mod auth;

/// Per-user download list storage and handlers
pub mod downloads;

/// Middleware for request processing
pub mod middleware;

/// API error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{AppState, ServerConfig};
