//! In-memory implementation of RevocationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::RevokedToken;
use crate::errors::DomainError;

use super::trait_::RevocationRepository;

/// Revocation store keyed by jti, for development and tests
#[derive(Clone, Default)]
pub struct InMemoryRevocationRepository {
    entries: Arc<RwLock<HashMap<String, RevokedToken>>>,
}

impl InMemoryRevocationRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored record
    pub async fn get(&self, jti: &str) -> Option<RevokedToken> {
        self.entries.read().await.get(jti).cloned()
    }
}

#[async_trait]
impl RevocationRepository for InMemoryRevocationRepository {
    async fn revoke(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;

        if entries.contains_key(jti) {
            return Ok(false);
        }

        entries.insert(jti.to_string(), RevokedToken::new(jti, expires_at));
        Ok(true)
    }

    async fn is_revoked(&self, jti: &str) -> Result<bool, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.contains_key(jti))
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut entries = self.entries.write().await;
        let initial_count = entries.len();

        entries.retain(|_, record| !record.is_purgeable_at(now));

        Ok(initial_count - entries.len())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.entries.read().await.len())
    }
}
