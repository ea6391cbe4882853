//! API Error Types
//!
//! This module defines the error taxonomy used by HTTP handlers and the
//! conversion of those errors into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs          - Module exports
//! ├── types.rs        - ApiError and status code mapping
//! └── conversion.rs   - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// HTTP response conversion
pub mod conversion;

pub use types::ApiError;
