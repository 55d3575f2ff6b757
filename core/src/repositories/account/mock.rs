//! In-memory implementation of AccountRepository for tests and examples

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::{Account, NewAccount, RegistrationStatus};
use crate::errors::{DomainError, DuplicateField};

use super::trait_::AccountRepository;

/// In-memory account repository
///
/// Uniqueness is enforced inside a single write-lock critical section,
/// giving the same one-winner guarantee as the database's unique
/// indexes. `fail_with_storage_error` lets tests exercise the transient
/// failure path.
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<i64, Account>>>,
    next_id: AtomicI64,
    fail: AtomicBool,
}

impl MockAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
            fail: AtomicBool::new(false),
        }
    }

    /// Make every subsequent operation fail with a storage error
    pub fn fail_with_storage_error(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Whether the repository holds no accounts
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::Storage {
                message: "simulated storage failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        self.check_failure()?;
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.username == username).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError> {
        self.check_failure()?;
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        self.check_failure()?;
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.check_failure()?;
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .any(|a| a.email.eq_ignore_ascii_case(email)))
    }

    async fn exists_by_faculty_id(&self, faculty_id: &str) -> Result<bool, DomainError> {
        self.check_failure()?;
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .any(|a| a.faculty_id_number.as_deref() == Some(faculty_id)))
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, DomainError> {
        self.check_failure()?;
        let mut accounts = self.accounts.write().await;

        // All three constraints checked under the same write lock that
        // performs the insert, so concurrent inserts serialize here.
        if accounts.values().any(|a| a.username == account.username) {
            return Err(DomainError::Duplicate(DuplicateField::Username));
        }
        if accounts
            .values()
            .any(|a| a.email.eq_ignore_ascii_case(&account.email))
        {
            return Err(DomainError::Duplicate(DuplicateField::Email));
        }
        if let Some(faculty_id) = &account.faculty_id_number {
            if accounts
                .values()
                .any(|a| a.faculty_id_number.as_deref() == Some(faculty_id.as_str()))
            {
                return Err(DomainError::Duplicate(DuplicateField::FacultyId));
            }
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Account {
            id,
            username: account.username,
            password_digest: account.password_digest,
            email: account.email,
            full_name: account.full_name,
            phone_number: account.phone_number,
            date_of_birth: account.date_of_birth,
            faculty_id_number: account.faculty_id_number,
            department: account.department,
            designation: account.designation,
            years_experience: account.years_experience,
            registration_status: account.registration_status,
            is_active: account.is_active,
            created_at: Utc::now(),
            last_login: None,
        };
        accounts.insert(id, created.clone());
        Ok(created)
    }

    async fn update_last_login(&self, id: i64, at: DateTime<Utc>) -> Result<(), DomainError> {
        self.check_failure()?;
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(&id).ok_or_else(|| DomainError::NotFound {
            resource: format!("account {id}"),
        })?;
        account.last_login = Some(at);
        Ok(())
    }

    async fn update_activation(&self, id: i64, is_active: bool) -> Result<(), DomainError> {
        self.check_failure()?;
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(&id).ok_or_else(|| DomainError::NotFound {
            resource: format!("account {id}"),
        })?;
        account.is_active = is_active;
        Ok(())
    }

    async fn update_registration_status(
        &self,
        id: i64,
        status: RegistrationStatus,
    ) -> Result<(), DomainError> {
        self.check_failure()?;
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(&id).ok_or_else(|| DomainError::NotFound {
            resource: format!("account {id}"),
        })?;
        account.registration_status = status;
        Ok(())
    }
}
