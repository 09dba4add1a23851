//! Tests for domain error classification

use crate::errors::{AuthError, DomainError, TokenError};

#[test]
fn test_token_rejections_are_unauthorized() {
    for err in [
        TokenError::Malformed,
        TokenError::InvalidSignature,
        TokenError::Expired,
        TokenError::Revoked,
    ] {
        assert!(DomainError::Token(err).is_unauthorized());
    }
}

#[test]
fn test_generation_failure_is_not_unauthorized() {
    assert!(!DomainError::Token(TokenError::GenerationFailed).is_unauthorized());
}

#[test]
fn test_auth_errors_classification() {
    assert!(DomainError::Auth(AuthError::InvalidCredentials).is_unauthorized());
    assert!(DomainError::Auth(AuthError::AccountNotFound).is_unauthorized());
    assert!(DomainError::Unauthorized.is_unauthorized());

    assert!(!DomainError::Auth(AuthError::DuplicateIdentifier).is_unauthorized());
    assert!(!DomainError::Auth(AuthError::NoActiveSession).is_unauthorized());
}

#[test]
fn test_internal_is_not_unauthorized() {
    let err = DomainError::internal("storage unavailable");
    assert!(!err.is_unauthorized());
    assert_eq!(err.to_string(), "Internal error: storage unavailable");
}

#[test]
fn test_from_conversions() {
    let err: DomainError = AuthError::DuplicateIdentifier.into();
    assert!(matches!(err, DomainError::Auth(AuthError::DuplicateIdentifier)));

    let err: DomainError = TokenError::Revoked.into();
    assert_eq!(err.to_string(), "Token revoked");
}
