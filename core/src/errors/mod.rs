//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
#[path = "tests/domain_error_tests.rs"]
mod tests;

// Re-export all error types
pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Whether the caller should see a generic "unauthorized" response.
    ///
    /// Covers bad credentials, every token rejection and a subject that no
    /// longer exists. `NoActiveSession` is excluded so logout can report it
    /// with its own message.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            DomainError::Unauthorized => true,
            DomainError::Auth(AuthError::InvalidCredentials)
            | DomainError::Auth(AuthError::AccountNotFound) => true,
            DomainError::Token(err) => err.is_rejection(),
            _ => false,
        }
    }

    /// Shorthand for storage and other unexpected failures
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
