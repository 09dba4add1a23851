//! MySQL implementation of the RevocationRepository trait.
//!
//! `jti` is the primary key of `revoked_tokens`, so concurrent revokes of the
//! same token collapse into one row and `INSERT IGNORE` makes them no-ops.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use lk_core::errors::DomainError;
use lk_core::repositories::RevocationRepository;

/// MySQL implementation of RevocationRepository
pub struct MySqlRevocationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRevocationRepository {
    /// Create a new MySQL revocation repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevocationRepository for MySqlRevocationRepository {
    async fn revoke(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<bool, DomainError> {
        let query = r#"
            INSERT IGNORE INTO revoked_tokens (jti, expires_at, revoked_at)
            VALUES (?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(jti)
            .bind(expires_at)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to revoke token: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn is_revoked(&self, jti: &str) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM revoked_tokens WHERE jti = ?")
            .bind(jti)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to check revocation: {}", e)))?;

        Ok(count > 0)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at < ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to purge revocations: {}", e)))?;

        Ok(result.rows_affected() as usize)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM revoked_tokens")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to count revocations: {}", e)))?;

        Ok(count as usize)
    }
}
