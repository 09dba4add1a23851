//! Periodic purge of expired revocation records
//!
//! A revoked token only needs to stay on the denylist until its own expiry;
//! after that the expiry check rejects it anyway.

use std::sync::Arc;

use chrono::Utc;
use lk_shared::CleanupConfig;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::errors::DomainError;
use crate::repositories::RevocationRepository;

/// Service for removing denylist entries that can no longer matter
pub struct RevocationCleanupService {
    repository: Arc<dyn RevocationRepository>,
    config: CleanupConfig,
}

impl RevocationCleanupService {
    /// Create a new cleanup service
    pub fn new(repository: Arc<dyn RevocationRepository>, config: CleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single cleanup cycle
    ///
    /// # Returns
    /// * `Ok(CleanupResult)` - Entries purged and entries left
    /// * `Err(DomainError)` - The store could not be purged
    pub async fn run_cleanup(&self) -> Result<CleanupResult, DomainError> {
        if !self.config.enabled {
            return Ok(CleanupResult::default());
        }

        debug!("Starting revocation cleanup cycle");

        let purged = self.repository.purge_expired(Utc::now()).await?;
        let remaining = self.repository.count().await?;

        info!(purged, remaining, "Revocation cleanup completed");

        Ok(CleanupResult { purged, remaining })
    }

    /// Start the cleanup service as a background task
    ///
    /// Returns `None` when cleanup is disabled. The task runs until the
    /// runtime shuts down or the handle is aborted.
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            warn!("Revocation cleanup is disabled");
            return None;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds.max(1));

        Some(tokio::spawn(async move {
            info!(
                "Revocation cleanup started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_cleanup().await {
                    error!("Revocation cleanup cycle failed: {}", e);
                }
            }
        }))
    }
}

/// Result of a cleanup cycle
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupResult {
    /// Number of expired entries removed
    pub purged: usize,
    /// Entries still on the denylist
    pub remaining: usize,
}
