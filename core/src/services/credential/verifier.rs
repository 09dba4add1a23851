//! Credential verifier implementation

use std::sync::Arc;

use tracing::error;

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainError};
use crate::repositories::AccountRepository;

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Input hashed once at construction to equalize unknown-identifier lookups
const TIMING_EQUALIZER_INPUT: &str = "latchkey-unknown-account";

/// Checks identifier/secret pairs against stored bcrypt hashes
pub struct CredentialVerifier {
    accounts: Arc<dyn AccountRepository>,
    cost: u32,
    /// Hash compared against when the identifier does not exist
    dummy_hash: String,
}

impl CredentialVerifier {
    /// Creates a verifier hashing new passwords at `cost`
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` if `cost` is outside bcrypt's range.
    pub fn new(accounts: Arc<dyn AccountRepository>, cost: u32) -> Result<Self, DomainError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            return Err(DomainError::Validation {
                message: format!(
                    "bcrypt cost must be between {} and {}, got {}",
                    MIN_BCRYPT_COST, MAX_BCRYPT_COST, cost
                ),
            });
        }

        let dummy_hash = bcrypt::hash(TIMING_EQUALIZER_INPUT, cost)
            .map_err(|e| DomainError::internal(format!("Failed to prepare password hasher: {}", e)))?;

        Ok(Self {
            accounts,
            cost,
            dummy_hash,
        })
    }

    /// Hashes a secret for storage
    pub async fn hash_password(&self, secret: &str) -> Result<String, DomainError> {
        let secret = secret.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(secret, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
    }

    /// Verifies a submitted identifier and secret
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The identifier exists and the secret matches
    /// * `Err(AuthError::InvalidCredentials)` - Unknown identifier or wrong secret
    /// * `Err(DomainError)` - Storage failure during lookup
    pub async fn verify(&self, identifier: &str, secret: &str) -> Result<Account, DomainError> {
        let account = self.accounts.find_by_email(identifier).await?;

        let hash = match &account {
            Some(account) => account.password_hash.clone(),
            None => self.dummy_hash.clone(),
        };

        let matches = verify_password(secret, hash).await?;

        match account {
            Some(account) if matches => Ok(account),
            _ => Err(AuthError::InvalidCredentials.into()),
        }
    }
}

/// Runs a bcrypt comparison off the async executor
///
/// An unparseable stored hash counts as a mismatch; it is logged because it
/// means the account can never log in.
async fn verify_password(secret: &str, hash: String) -> Result<bool, DomainError> {
    let secret = secret.to_owned();

    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(secret, &hash))
        .await
        .map_err(|e| DomainError::internal(format!("Password verification task failed: {}", e)))?;

    match outcome {
        Ok(matches) => Ok(matches),
        Err(e) => {
            error!("Stored password hash could not be parsed: {}", e);
            Ok(false)
        }
    }
}
