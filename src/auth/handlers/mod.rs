//! Authentication Handlers
//!
//! HTTP handlers for the public authentication endpoints.
//!
//! - `POST /signup` - user registration (`signup.rs`)
//! - `POST /token` - credential login and token issuance (`login.rs`)

/// Request/response types
pub mod types;

/// User registration handler
pub mod signup;

/// Credential login / token issuance handler
pub mod login;

pub use login::issue_token;
pub use signup::signup;
