//! Error types for authentication and token handling
//!
//! Messages here are for logs. The presentation layer decides what the
//! client sees and collapses most of these into a single "unauthorized".

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown identifier or wrong secret; the two are deliberately identical
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Identifier already registered")]
    DuplicateIdentifier,

    /// Token was valid but its subject no longer exists
    #[error("Account not found")]
    AccountNotFound,

    /// Logout was requested without a currently valid token
    #[error("Couldn't find an active session")]
    NoActiveSession,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Token revoked")]
    Revoked,

    #[error("Token generation failed")]
    GenerationFailed,
}

impl TokenError {
    /// Whether this error rejects a presented token (as opposed to a
    /// server-side failure while minting one)
    pub fn is_rejection(&self) -> bool {
        !matches!(self, TokenError::GenerationFailed)
    }
}
