//! Error types for Livimmo session operations

use thiserror::Error;

/// Errors from the session holder's auth operations.
///
/// The current login/signup stubs never produce these; the variants keep the
/// failure branch in place for when real credential verification lands. No
/// particular validation rule is assumed yet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email/password pair was rejected
    #[error("invalid credentials for {0}")]
    InvalidCredentials(String),

    /// Account creation failed
    #[error("signup failed: {0}")]
    SignupFailed(String),
}
