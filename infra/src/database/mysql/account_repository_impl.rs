//! MySQL implementation of the AccountRepository trait.
//!
//! Uniqueness is enforced by the `uq_accounts_*` indexes; a rejected
//! insert is mapped back to the specific duplicate kind by inspecting
//! which index the server reported.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};

use sb_core::domain::entities::account::{
    Account, Department, Designation, NewAccount, RegistrationStatus,
};
use sb_core::errors::{DomainError, DuplicateField};
use sb_core::repositories::AccountRepository;

use super::super::connection::DatabasePool;

const ACCOUNT_COLUMNS: &str = r#"
    id, username, password_digest, email, full_name, phone_number,
    date_of_birth, faculty_id_number, department, designation,
    years_experience, registration_status, is_active, created_at, last_login
"#;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: &DatabasePool) -> Self {
        Self {
            pool: pool.inner().clone(),
        }
    }

    /// Map a generic SQLx error to the storage error kind
    fn storage_error(context: &str, e: sqlx::Error) -> DomainError {
        DomainError::Storage {
            message: format!("{context}: {e}"),
        }
    }

    /// Map an insert failure, translating unique-index violations
    fn map_insert_error(e: sqlx::Error) -> DomainError {
        if let sqlx::Error::Database(db_err) = &e {
            if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) {
                let message = db_err.message();
                let field = if message.contains("uq_accounts_username") {
                    DuplicateField::Username
                } else if message.contains("uq_accounts_email") {
                    DuplicateField::Email
                } else {
                    DuplicateField::FacultyId
                };
                return DomainError::Duplicate(field);
            }
        }
        Self::storage_error("failed to insert account", e)
    }

    /// Treat an update that touched no rows as not-found, unless the row
    /// exists and the update was simply a no-op (MySQL reports changed
    /// rows, not matched rows, by default).
    async fn check_updated(&self, id: i64, rows_affected: u64) -> Result<(), DomainError> {
        if rows_affected > 0 {
            return Ok(());
        }
        match self.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound {
                resource: format!("account {id}"),
            }),
        }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let department_str: String = row
            .try_get("department")
            .map_err(|e| Self::storage_error("failed to get department", e))?;
        let department =
            Department::from_str(&department_str).ok_or_else(|| DomainError::Internal {
                message: format!("unknown department in store: {department_str}"),
            })?;

        let designation_str: String = row
            .try_get("designation")
            .map_err(|e| Self::storage_error("failed to get designation", e))?;
        let designation =
            Designation::from_str(&designation_str).ok_or_else(|| DomainError::Internal {
                message: format!("unknown designation in store: {designation_str}"),
            })?;

        let status_str: String = row
            .try_get("registration_status")
            .map_err(|e| Self::storage_error("failed to get registration_status", e))?;
        let registration_status =
            RegistrationStatus::from_str(&status_str).ok_or_else(|| DomainError::Internal {
                message: format!("unknown registration status in store: {status_str}"),
            })?;

        Ok(Account {
            id: row
                .try_get("id")
                .map_err(|e| Self::storage_error("failed to get id", e))?,
            username: row
                .try_get("username")
                .map_err(|e| Self::storage_error("failed to get username", e))?,
            password_digest: row
                .try_get("password_digest")
                .map_err(|e| Self::storage_error("failed to get password_digest", e))?,
            email: row
                .try_get("email")
                .map_err(|e| Self::storage_error("failed to get email", e))?,
            full_name: row
                .try_get("full_name")
                .map_err(|e| Self::storage_error("failed to get full_name", e))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| Self::storage_error("failed to get phone_number", e))?,
            date_of_birth: row
                .try_get::<Option<NaiveDate>, _>("date_of_birth")
                .map_err(|e| Self::storage_error("failed to get date_of_birth", e))?,
            faculty_id_number: row
                .try_get("faculty_id_number")
                .map_err(|e| Self::storage_error("failed to get faculty_id_number", e))?,
            department,
            designation,
            years_experience: row
                .try_get("years_experience")
                .map_err(|e| Self::storage_error("failed to get years_experience", e))?,
            registration_status,
            is_active: row
                .try_get("is_active")
                .map_err(|e| Self::storage_error("failed to get is_active", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| Self::storage_error("failed to get created_at", e))?,
            last_login: row
                .try_get::<Option<DateTime<Utc>>, _>("last_login")
                .map_err(|e| Self::storage_error("failed to get last_login", e))?,
        })
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE username = ?");

        let row = sqlx::query(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::storage_error("failed to find account by username", e))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError> {
        let query = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::storage_error("failed to find account by id", e))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM accounts WHERE username = ?) AS present")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::storage_error("failed to check username existence", e))?;

        let present: i64 = row
            .try_get("present")
            .map_err(|e| Self::storage_error("failed to get existence flag", e))?;
        Ok(present != 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        // LOWER on both sides keeps the comparison case-insensitive even
        // if the column collation ever changes.
        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE LOWER(email) = LOWER(?)) AS present",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::storage_error("failed to check email existence", e))?;

        let present: i64 = row
            .try_get("present")
            .map_err(|e| Self::storage_error("failed to get existence flag", e))?;
        Ok(present != 0)
    }

    async fn exists_by_faculty_id(&self, faculty_id: &str) -> Result<bool, DomainError> {
        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE faculty_id_number = ?) AS present",
        )
        .bind(faculty_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::storage_error("failed to check faculty id existence", e))?;

        let present: i64 = row
            .try_get("present")
            .map_err(|e| Self::storage_error("failed to get existence flag", e))?;
        Ok(present != 0)
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                username, password_digest, email, full_name, phone_number,
                date_of_birth, faculty_id_number, department, designation,
                years_experience, registration_status, is_active, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let created_at = Utc::now();
        let result = sqlx::query(query)
            .bind(&account.username)
            .bind(&account.password_digest)
            .bind(&account.email)
            .bind(&account.full_name)
            .bind(&account.phone_number)
            .bind(account.date_of_birth)
            .bind(&account.faculty_id_number)
            .bind(account.department.as_str())
            .bind(account.designation.as_str())
            .bind(account.years_experience)
            .bind(account.registration_status.as_str())
            .bind(account.is_active)
            .bind(created_at)
            .execute(&self.pool)
            .await
            .map_err(Self::map_insert_error)?;

        let id = result.last_insert_id() as i64;
        Ok(Account {
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
            created_at,
            last_login: None,
        })
    }

    async fn update_last_login(&self, id: i64, at: DateTime<Utc>) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE accounts SET last_login = ? WHERE id = ?")
            .bind(at)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::storage_error("failed to update last login", e))?;

        self.check_updated(id, result.rows_affected()).await
    }

    async fn update_activation(&self, id: i64, is_active: bool) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE accounts SET is_active = ? WHERE id = ?")
            .bind(is_active)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::storage_error("failed to update activation", e))?;

        self.check_updated(id, result.rows_affected()).await
    }

    async fn update_registration_status(
        &self,
        id: i64,
        status: RegistrationStatus,
    ) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE accounts SET registration_status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::storage_error("failed to update registration status", e))?;

        self.check_updated(id, result.rows_affected()).await
    }
}
