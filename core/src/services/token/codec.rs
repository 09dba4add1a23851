//! JWT encoding and decoding

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::{AccessToken, Claims, JTI_LENGTH};
use crate::errors::{DomainError, TokenError};

use super::config::TokenCodecConfig;

/// Signs and verifies access tokens
///
/// Decoding checks structure, signature and issuer only. Expiry and
/// revocation are applied by the caller.
pub struct TokenCodec {
    config: TokenCodecConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Creates a new codec
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` if the secret is empty, the lifetime is not
    /// positive or the algorithm is not HMAC based.
    pub fn new(config: TokenCodecConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a token for `account` starting now
    pub fn issue(&self, account: &Account) -> Result<AccessToken, DomainError> {
        self.issue_at(account, Utc::now())
    }

    /// Issues a token for `account` with an explicit issue time
    ///
    /// `TokenError::GenerationFailed` if the expiry falls outside the
    /// representable date range.
    pub fn issue_at(&self, account: &Account, now: DateTime<Utc>) -> Result<AccessToken, DomainError> {
        let claims = Claims::new(
            account.email.clone(),
            generate_jti(),
            self.config.issuer.clone(),
            now,
            self.config.token_lifetime,
        );

        let expires_at = claims.expires_at().ok_or(TokenError::GenerationFailed)?;
        let token = self.encode(&claims)?;

        Ok(AccessToken {
            token,
            jti: claims.jti,
            expires_at,
            expires_in: claims.exp - claims.iat,
        })
    }

    /// Signs arbitrary claims
    pub fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(self.config.algorithm), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Parses a token and verifies its signature and issuer
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature and issuer check out; expiry is NOT checked
    /// * `Err(TokenError::InvalidSignature)` - Signed with another key
    /// * `Err(TokenError::Malformed)` - Anything else that fails to parse
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })
    }
}

/// 128 random bits, hex encoded
fn generate_jti() -> String {
    let mut bytes = [0u8; JTI_LENGTH / 2];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
