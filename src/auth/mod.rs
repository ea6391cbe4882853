//! Authentication Module
//!
//! This module handles user registration, credential verification, and
//! bearer-token issuance.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model and store operations
//! ├── passwords.rs    - bcrypt hashing and verification
//! ├── tokens.rs       - JWT token service
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     └── login.rs    - Credential login / token issuance handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: password hashed → user inserted (atomic insert-or-reject)
//! 2. **Login**: user looked up → password verified → JWT issued
//! 3. **Guarded request**: JWT verified → subject used as the identity
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are stateless and expire after 30 minutes
//! - Invalid credentials return 401 with no information leakage

/// User data model and store operations
pub mod users;

/// Password hashing and verification
pub mod passwords;

/// JWT token issuance and verification
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{SignupRequest, TokenRequest, TokenResponse};
pub use handlers::{issue_token, signup};
pub use tokens::{Claims, TokenError, TokenService};
