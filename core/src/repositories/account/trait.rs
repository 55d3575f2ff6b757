//! Account repository trait defining the interface for credential persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::account::{Account, NewAccount, RegistrationStatus};
use crate::errors::DomainError;

/// Repository trait for account persistence operations
///
/// Implementations own the uniqueness guarantees: `insert` must enforce
/// the username/email/faculty-id constraints atomically, so two
/// concurrent inserts with the same username can never both succeed.
/// Username comparisons are case-sensitive; email comparisons are
/// case-insensitive.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its exact username
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - account found
    /// * `Ok(None)` - no account with that username
    /// * `Err(DomainError::Storage)` - lookup failed
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError>;

    /// Check whether a username is taken (case-sensitive)
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Check whether an email is registered (case-insensitive)
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check whether a faculty ID number is registered
    async fn exists_by_faculty_id(&self, faculty_id: &str) -> Result<bool, DomainError>;

    /// Insert a new account and return it with its assigned id
    ///
    /// # Returns
    /// * `Ok(Account)` - the created account, id and creation time set
    /// * `Err(DomainError::Duplicate)` - a uniqueness constraint collided
    /// * `Err(DomainError::Storage)` - insert failed
    async fn insert(&self, account: NewAccount) -> Result<Account, DomainError>;

    /// Stamp the last successful login time (last-write-wins)
    async fn update_last_login(&self, id: i64, at: DateTime<Utc>) -> Result<(), DomainError>;

    /// Set the activation flag
    async fn update_activation(&self, id: i64, is_active: bool) -> Result<(), DomainError>;

    /// Set the registration status
    ///
    /// Pure storage operation; the pending-only transition rule lives in
    /// the registration service.
    async fn update_registration_status(
        &self,
        id: i64,
        status: RegistrationStatus,
    ) -> Result<(), DomainError>;
}
