//! Account repository trait defining the interface for account persistence.
//!
//! The trait is async-first and object safe so services can hold it as
//! `Arc<dyn AccountRepository>` regardless of the storage backend.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// Implementations must enforce identifier uniqueness themselves (a unique
/// index, a map key) rather than relying on callers checking `exists` first,
/// because two registrations for the same email can race.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use lk_core::repositories::AccountRepository;
/// use lk_core::domain::entities::account::Account;
/// use lk_core::errors::DomainError;
///
/// struct PostgresAccountRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl AccountRepository for PostgresAccountRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     async fn create(&self, account: Account) -> Result<Account, DomainError> {
///         Ok(account)
///     }
///
///     async fn exists(&self, email: &str) -> Result<bool, DomainError> {
///         Ok(false)
///     }
/// }
/// ```
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its identifier, compared case-sensitively
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with that identifier
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError::Auth(AuthError::DuplicateIdentifier))` - Email already taken
    /// * `Err(DomainError)` - Storage error occurred
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Check whether an account with this identifier exists
    async fn exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
