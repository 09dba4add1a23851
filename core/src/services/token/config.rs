//! Configuration for the token codec

use std::fmt;
use std::str::FromStr;

use jsonwebtoken::Algorithm;
use lk_shared::{JwtConfig, MAX_TOKEN_LIFETIME_SECONDS};

use crate::domain::entities::token::DEFAULT_ISSUER;
use crate::errors::DomainError;

/// Signing algorithms the codec accepts
const SUPPORTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Configuration for the token codec
#[derive(Clone)]
pub struct TokenCodecConfig {
    /// HMAC signing secret
    pub secret_key: String,
    /// How long an issued token stays valid
    pub token_lifetime: chrono::Duration,
    /// Value of the `iss` claim, also required on decode
    pub issuer: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
}

impl TokenCodecConfig {
    /// Create a config with the default lifetime, issuer and algorithm
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            token_lifetime: chrono::Duration::minutes(30),
            issuer: DEFAULT_ISSUER.to_string(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Set the token lifetime
    pub fn with_lifetime(mut self, lifetime: chrono::Duration) -> Self {
        self.token_lifetime = lifetime;
        self
    }

    /// Build from the shared JWT configuration
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` for a non-HMAC or unknown algorithm name, or
    /// a lifetime outside `1..=MAX_TOKEN_LIFETIME_SECONDS`.
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        if !(1..=MAX_TOKEN_LIFETIME_SECONDS).contains(&config.token_lifetime) {
            return Err(invalid_lifetime());
        }

        let algorithm = Algorithm::from_str(&config.algorithm.to_uppercase()).map_err(|_| {
            DomainError::Validation {
                message: format!("Unknown JWT algorithm: {}", config.algorithm),
            }
        })?;

        Ok(Self {
            secret_key: config.secret.clone(),
            token_lifetime: chrono::Duration::seconds(config.token_lifetime),
            issuer: config.issuer.clone(),
            algorithm,
        })
    }

    /// Check the config can sign and verify tokens
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.secret_key.is_empty() {
            return Err(DomainError::Validation {
                message: "JWT secret must not be empty".to_string(),
            });
        }

        if !SUPPORTED_ALGORITHMS.contains(&self.algorithm) {
            return Err(DomainError::Validation {
                message: format!("Unsupported JWT algorithm: {:?}", self.algorithm),
            });
        }

        if self.token_lifetime <= chrono::Duration::zero()
            || self.token_lifetime.num_seconds() > MAX_TOKEN_LIFETIME_SECONDS
        {
            return Err(invalid_lifetime());
        }

        Ok(())
    }
}

fn invalid_lifetime() -> DomainError {
    DomainError::Validation {
        message: format!(
            "Token lifetime must be between 1 and {} seconds",
            MAX_TOKEN_LIFETIME_SECONDS
        ),
    }
}

impl fmt::Debug for TokenCodecConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodecConfig")
            .field("secret_key", &"[REDACTED]")
            .field("token_lifetime", &self.token_lifetime)
            .field("issuer", &self.issuer)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
