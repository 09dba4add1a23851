//! Unit tests for the token codec

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::Algorithm;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::{Claims, JTI_LENGTH};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenCodec, TokenCodecConfig};

const SECRET: &str = "test-secret-key-that-is-long-enough-for-hmac";

fn codec() -> TokenCodec {
    TokenCodec::new(TokenCodecConfig::new(SECRET)).unwrap()
}

fn account() -> Account {
    Account::new("a@x.com", "$2b$04$hash")
}

#[test]
fn test_issue_and_decode() {
    let codec = codec();
    let issued = codec.issue(&account()).unwrap();

    let claims = codec.decode(&issued.token).unwrap();
    assert_eq!(claims.sub, "a@x.com");
    assert_eq!(claims.jti, issued.jti);
    assert_eq!(claims.iss, "latchkey");
    assert_eq!(claims.exp - claims.iat, 1800);
    assert_eq!(issued.expires_in, 1800);
    assert_eq!(claims.expires_at(), Some(issued.expires_at));
}

#[test]
fn test_issue_at_uses_given_clock() {
    let codec = codec();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

    let issued = codec.issue_at(&account(), now).unwrap();
    let claims = codec.decode(&issued.token).unwrap();

    assert_eq!(claims.iat, now.timestamp());
    assert_eq!(issued.expires_at, now + Duration::minutes(30));
}

#[test]
fn test_jti_is_unique_hex() {
    let codec = codec();
    let account = account();

    let mut seen = std::collections::HashSet::new();
    for _ in 0..100 {
        let issued = codec.issue(&account).unwrap();
        assert_eq!(issued.jti.len(), JTI_LENGTH);
        assert!(issued.jti.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(seen.insert(issued.jti));
    }
}

#[test]
fn test_decode_ignores_expiry() {
    let codec = codec();
    let past = Utc::now() - Duration::hours(2);
    let claims = Claims::new("a@x.com", "0".repeat(32), "latchkey", past, Duration::minutes(30));

    let token = codec.encode(&claims).unwrap();
    let decoded = codec.decode(&token).unwrap();

    assert_eq!(decoded, claims);
    assert!(decoded.is_expired());
}

#[test]
fn test_wrong_key_is_invalid_signature() {
    let issuer = TokenCodec::new(TokenCodecConfig::new("another-secret-of-reasonable-length!!")).unwrap();
    let token = issuer.issue(&account()).unwrap().token;

    assert_eq!(codec().decode(&token), Err(TokenError::InvalidSignature));
}

#[test]
fn test_tampered_payload_is_rejected() {
    let codec = codec();
    let token = codec.issue(&account()).unwrap().token;

    let forged = Claims::new("b@x.com", "1".repeat(32), "latchkey", Utc::now(), Duration::minutes(30));
    let forged_payload = codec.encode(&forged).unwrap();

    let parts: Vec<&str> = token.split('.').collect();
    let forged_parts: Vec<&str> = forged_payload.split('.').collect();
    let spliced = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);

    assert_eq!(codec.decode(&spliced), Err(TokenError::InvalidSignature));
}

#[test]
fn test_garbage_is_malformed() {
    let codec = codec();

    for input in ["", "not-a-token", "a.b.c", "a.b", "...."] {
        assert_eq!(codec.decode(input), Err(TokenError::Malformed), "input: {:?}", input);
    }
}

#[test]
fn test_wrong_issuer_is_malformed() {
    let other = TokenCodec::new(TokenCodecConfig {
        issuer: "someone-else".to_string(),
        ..TokenCodecConfig::new(SECRET)
    })
    .unwrap();
    let token = other.issue(&account()).unwrap().token;

    assert_eq!(codec().decode(&token), Err(TokenError::Malformed));
}

#[test]
fn test_algorithm_mismatch_is_malformed() {
    let hs512 = TokenCodec::new(TokenCodecConfig {
        algorithm: Algorithm::HS512,
        ..TokenCodecConfig::new(SECRET)
    })
    .unwrap();
    let token = hs512.issue(&account()).unwrap().token;

    assert!(hs512.decode(&token).is_ok());
    assert_eq!(codec().decode(&token), Err(TokenError::Malformed));
}

#[test]
fn test_rejects_invalid_config() {
    assert!(TokenCodec::new(TokenCodecConfig::new("")).is_err());

    let rsa = TokenCodecConfig {
        algorithm: Algorithm::RS256,
        ..TokenCodecConfig::new(SECRET)
    };
    assert!(TokenCodec::new(rsa).is_err());

    let zero = TokenCodecConfig::new(SECRET).with_lifetime(Duration::zero());
    assert!(TokenCodec::new(zero).is_err());

    let too_long = TokenCodecConfig::new(SECRET)
        .with_lifetime(Duration::seconds(lk_shared::MAX_TOKEN_LIFETIME_SECONDS + 1));
    assert!(TokenCodec::new(too_long).is_err());
}

#[test]
fn test_config_from_jwt_config_bounds_lifetime() {
    let mut jwt = lk_shared::JwtConfig::new(SECRET);

    for seconds in [0, -1, lk_shared::MAX_TOKEN_LIFETIME_SECONDS + 1, 10_000_000_000_000, i64::MAX] {
        jwt.token_lifetime = seconds;
        assert!(TokenCodecConfig::from_jwt_config(&jwt).is_err());
    }

    jwt.token_lifetime = lk_shared::MAX_TOKEN_LIFETIME_SECONDS;
    let config = TokenCodecConfig::from_jwt_config(&jwt).unwrap();
    assert!(TokenCodec::new(config).is_ok());
}

#[test]
fn test_issue_past_end_of_calendar_fails() {
    let result = codec().issue_at(&account(), DateTime::<Utc>::MAX_UTC);

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::GenerationFailed))
    ));
}

#[test]
fn test_config_from_jwt_config() {
    let mut jwt = lk_shared::JwtConfig::new(SECRET).with_lifetime_minutes(5);
    jwt.algorithm = "hs384".to_string();

    let config = TokenCodecConfig::from_jwt_config(&jwt).unwrap();
    assert_eq!(config.algorithm, Algorithm::HS384);
    assert_eq!(config.token_lifetime, Duration::minutes(5));

    jwt.algorithm = "none".to_string();
    assert!(TokenCodecConfig::from_jwt_config(&jwt).is_err());
}

#[test]
fn test_config_debug_hides_secret() {
    let debug = format!("{:?}", TokenCodecConfig::new(SECRET));
    assert!(!debug.contains(SECRET));
    assert!(debug.contains("[REDACTED]"));
}
