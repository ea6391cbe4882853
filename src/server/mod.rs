//! Server Module
//!
//! This module contains all code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports
//! ├── config.rs       - Configuration loading, pool creation, migrations
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env` reads the
//!    database URL, JWT secret, port, and token TTL once at startup
//! 2. **Pool Creation**: a PostgreSQL connection pool is created; the
//!    pool is the only shared resource between requests
//! 3. **Migrations**: an explicit, idempotent migration step runs before
//!    the server accepts requests
//! 4. **Router Creation**: `create_app` assembles state and routes

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
