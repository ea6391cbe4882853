//! Downloads Module
//!
//! Per-user download list: store operations and the guarded HTTP
//! handlers that expose them.
//!
//! ```text
//! downloads/
//! ├── mod.rs          - Module exports
//! ├── db.rs           - Atomic append and ordered list queries
//! └── handlers.rs     - POST /download and GET /downloads handlers
//! ```

/// Database operations for the download list
pub mod db;

/// HTTP handlers for the download endpoints
pub mod handlers;

pub use handlers::{list_downloads, save_download};
