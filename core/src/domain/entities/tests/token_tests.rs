//! Unit tests for token entities

use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::token::{AccessToken, Claims, RevokedToken};

#[test]
fn test_claims_timestamps() {
    let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let claims = Claims::new("a@x.com", "jti-1", "latchkey", issued_at, Duration::minutes(30));

    assert_eq!(claims.sub, "a@x.com");
    assert_eq!(claims.iat, issued_at.timestamp());
    assert_eq!(claims.exp - claims.iat, 30 * 60);
    assert_eq!(claims.expires_at(), Some(issued_at + Duration::minutes(30)));
    assert_eq!(claims.issued_at(), Some(issued_at));
}

#[test]
fn test_claims_with_unrepresentable_expiry() {
    let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let claims = Claims::new(
        "a@x.com",
        "jti-1",
        "latchkey",
        issued_at,
        Duration::seconds(10_000_000_000_000),
    );

    assert_eq!(claims.expires_at(), None);
    assert_eq!(claims.issued_at(), Some(issued_at));
}

#[test]
fn test_claims_expiry_boundary() {
    let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let claims = Claims::new("a@x.com", "jti-1", "latchkey", issued_at, Duration::seconds(60));

    assert!(!claims.is_expired_at(issued_at));
    assert!(!claims.is_expired_at(issued_at + Duration::seconds(59)));
    // Exactly at exp the token is no longer live
    assert!(claims.is_expired_at(issued_at + Duration::seconds(60)));
    assert!(claims.is_expired_at(issued_at + Duration::hours(1)));
}

#[test]
fn test_fresh_claims_are_not_expired() {
    let claims = Claims::new("a@x.com", "jti-1", "latchkey", Utc::now(), Duration::minutes(5));
    assert!(!claims.is_expired());
}

#[test]
fn test_access_token_bearer() {
    let token = AccessToken {
        token: "abc.def.ghi".to_string(),
        jti: "jti-1".to_string(),
        expires_at: Utc::now(),
        expires_in: 1800,
    };
    assert_eq!(token.bearer(), "Bearer abc.def.ghi");
}

#[test]
fn test_revoked_token_purgeable() {
    let expires_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let record = RevokedToken::new("jti-1", expires_at);

    assert!(!record.is_purgeable_at(expires_at - Duration::seconds(1)));
    assert!(!record.is_purgeable_at(expires_at));
    assert!(record.is_purgeable_at(expires_at + Duration::seconds(1)));
}
