//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports
//! ├── router.rs       - Router assembly, CORS, fallback
//! └── api_routes.rs   - Public and guarded route registration
//! ```

/// Route registration
pub mod api_routes;

/// Router assembly
pub mod router;

pub use router::create_router;
