//! Revocation repository trait: the denylist of logged-out token ids.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::DomainError;

/// Repository trait for the token revocation store
///
/// The store holds the `jti` of every token that was explicitly revoked
/// before its natural expiry, together with that expiry so the entry can be
/// purged once the token would be rejected anyway.
///
/// # Consistency
/// Implementations must be safe under concurrent `revoke` and `is_revoked`
/// calls. Once `revoke` has returned, every later `is_revoked` for the same
/// jti must return `true` until the entry is purged.
#[async_trait]
pub trait RevocationRepository: Send + Sync {
    /// Record a revoked token id
    ///
    /// Idempotent: revoking an already-revoked jti is not an error.
    ///
    /// # Returns
    /// * `Ok(true)` - The jti was newly recorded
    /// * `Ok(false)` - The jti was already present
    /// * `Err(DomainError)` - The write failed; the token is still live
    async fn revoke(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<bool, DomainError>;

    /// Check whether a token id has been revoked
    async fn is_revoked(&self, jti: &str) -> Result<bool, DomainError>;

    /// Remove entries whose `expires_at` is before `now`
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of entries removed
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;

    /// Number of entries currently stored
    async fn count(&self) -> Result<usize, DomainError>;
}
