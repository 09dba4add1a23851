//! Main session service implementation

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lk_shared::AuthConfig;
use tracing::{debug, error, info};

use crate::domain::entities::account::Account;
use crate::domain::entities::token::{AccessToken, Claims, RevokedToken};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{AccountRepository, RevocationRepository};
use crate::services::credential::CredentialVerifier;
use crate::services::token::{TokenCodec, TokenCodecConfig};

/// Result of a successful register or login
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub account: Account,
    pub token: AccessToken,
}

/// A token that passed every check, with the account it belongs to
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub account: Account,
    pub claims: Claims,
}

/// Resolves a bearer token to an authenticated account
///
/// This is the only thing request guards need from the session layer.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Validate a token presented by a client
    ///
    /// # Returns
    /// * `Ok(Authenticated)` - Token is well-formed, signed, live and not revoked
    /// * `Err(DomainError)` - Rejection (see `DomainError::is_unauthorized`) or
    ///   a storage failure
    async fn authenticate(&self, token: &str) -> Result<Authenticated, DomainError>;
}

/// Session service coordinating credentials, tokens and revocation
pub struct SessionService {
    /// Account persistence
    accounts: Arc<dyn AccountRepository>,
    /// Denylist of revoked token ids
    revocations: Arc<dyn RevocationRepository>,
    /// Password hashing and verification
    verifier: CredentialVerifier,
    /// Token signing and parsing
    codec: TokenCodec,
}

impl SessionService {
    /// Create a new session service
    ///
    /// # Arguments
    ///
    /// * `accounts` - Account storage, also used by the verifier
    /// * `revocations` - Revocation store
    /// * `verifier` - Credential verifier
    /// * `codec` - Token codec
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        revocations: Arc<dyn RevocationRepository>,
        verifier: CredentialVerifier,
        codec: TokenCodec,
    ) -> Self {
        Self {
            accounts,
            revocations,
            verifier,
            codec,
        }
    }

    /// Build the service and its collaborators from configuration
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` for a bad bcrypt cost or token configuration.
    pub fn from_config(
        accounts: Arc<dyn AccountRepository>,
        revocations: Arc<dyn RevocationRepository>,
        config: &AuthConfig,
    ) -> Result<Self, DomainError> {
        let verifier = CredentialVerifier::new(accounts.clone(), config.password.bcrypt_cost)?;
        let codec = TokenCodec::new(TokenCodecConfig::from_jwt_config(&config.jwt)?)?;

        Ok(Self::new(accounts, revocations, verifier, codec))
    }

    /// Token codec used by this service
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Register a new account and issue its first token
    ///
    /// # Returns
    ///
    /// * `Ok(AuthSession)` - Account created and token issued
    /// * `Err(DomainError::Validation)` - Empty identifier or secret
    /// * `Err(AuthError::DuplicateIdentifier)` - Identifier already registered
    pub async fn register(&self, identifier: &str, secret: &str) -> Result<AuthSession, DomainError> {
        let email = Account::normalize_email(identifier);

        if email.is_empty() {
            return Err(DomainError::Validation {
                message: "Email can't be blank".to_string(),
            });
        }
        if secret.is_empty() {
            return Err(DomainError::Validation {
                message: "Password can't be blank".to_string(),
            });
        }

        // Skip the bcrypt work for the common duplicate case; `create` still
        // enforces uniqueness for concurrent registrations.
        if self.accounts.exists(&email).await? {
            return Err(AuthError::DuplicateIdentifier.into());
        }

        let password_hash = self.verifier.hash_password(secret).await?;
        let account = self.accounts.create(Account::new(email, password_hash)).await?;
        let token = self.codec.issue(&account)?;

        info!(account_id = %account.id, "Account registered");

        Ok(AuthSession { account, token })
    }

    /// Verify credentials and issue a token
    ///
    /// # Returns
    ///
    /// * `Ok(AuthSession)` - Credentials match
    /// * `Err(AuthError::InvalidCredentials)` - Unknown identifier or wrong secret
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<AuthSession, DomainError> {
        let email = Account::normalize_email(identifier);

        let account = self.verifier.verify(&email, secret).await.map_err(|e| {
            if !e.is_unauthorized() {
                error!("Login failed on storage: {}", e);
            }
            e
        })?;
        let token = self.codec.issue(&account)?;

        info!(account_id = %account.id, "Account logged in");

        Ok(AuthSession { account, token })
    }

    /// Validate a token against the current time
    pub async fn authenticate(&self, token: &str) -> Result<Authenticated, DomainError> {
        self.authenticate_at(token, Utc::now()).await
    }

    /// Validate a token against an explicit clock
    ///
    /// Checks run in order: signature and structure, expiry, revocation,
    /// account existence. A revocation store failure is returned as an
    /// error and never treated as "not revoked".
    pub async fn authenticate_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Authenticated, DomainError> {
        let claims = self.codec.decode(token)?;

        if claims.expires_at().is_none() {
            return Err(TokenError::Malformed.into());
        }
        if claims.is_expired_at(now) {
            return Err(TokenError::Expired.into());
        }

        if self.revocations.is_revoked(&claims.jti).await? {
            debug!(jti = %claims.jti, "Rejected revoked token");
            return Err(TokenError::Revoked.into());
        }

        let account = self
            .accounts
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        Ok(Authenticated { account, claims })
    }

    /// Revoke the presented token
    pub async fn logout(&self, token: &str) -> Result<RevokedToken, DomainError> {
        self.logout_at(token, Utc::now()).await
    }

    /// Revoke the presented token, judging validity at `now`
    ///
    /// # Returns
    ///
    /// * `Ok(RevokedToken)` - The token's jti is now on the denylist
    /// * `Err(AuthError::NoActiveSession)` - The token was not currently valid
    /// * `Err(DomainError::Internal)` - The revocation could not be stored; the
    ///   token is still live
    pub async fn logout_at(&self, token: &str, now: DateTime<Utc>) -> Result<RevokedToken, DomainError> {
        let authenticated = self.authenticate_at(token, now).await.map_err(|e| {
            if e.is_unauthorized() {
                DomainError::Auth(AuthError::NoActiveSession)
            } else {
                e
            }
        })?;

        let claims = authenticated.claims;
        let expires_at = claims.expires_at().ok_or(TokenError::Malformed)?;

        self.revocations
            .revoke(&claims.jti, expires_at)
            .await
            .map_err(|e| {
                error!(jti = %claims.jti, "Failed to record revocation: {}", e);
                e
            })?;

        info!(account_id = %authenticated.account.id, jti = %claims.jti, "Token revoked");

        Ok(RevokedToken::new(claims.jti, expires_at))
    }
}

#[async_trait]
impl Authenticator for SessionService {
    async fn authenticate(&self, token: &str) -> Result<Authenticated, DomainError> {
        SessionService::authenticate(self, token).await
    }
}
