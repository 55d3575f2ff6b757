//! MySQL implementation of the LoginAttemptRepository trait.
//!
//! Insert-only: the audit trail exposes no read path to the core, and
//! nothing here updates or deletes rows.

use async_trait::async_trait;
use sqlx::MySqlPool;

use sb_core::domain::entities::login_attempt::LoginAttempt;
use sb_core::errors::DomainError;
use sb_core::repositories::LoginAttemptRepository;

use super::super::connection::DatabasePool;

/// MySQL implementation of LoginAttemptRepository
pub struct MySqlLoginAttemptRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlLoginAttemptRepository {
    /// Create a new MySQL login attempt repository
    pub fn new(pool: &DatabasePool) -> Self {
        Self {
            pool: pool.inner().clone(),
        }
    }
}

#[async_trait]
impl LoginAttemptRepository for MySqlLoginAttemptRepository {
    async fn append(&self, attempt: &LoginAttempt) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO login_attempts (
                id, account_id, successful, source_address, created_at
            ) VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(attempt.id.to_string())
            .bind(attempt.account_id)
            .bind(attempt.successful)
            .bind(&attempt.source_address)
            .bind(attempt.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("failed to append login attempt: {e}"),
            })?;

        Ok(())
    }
}
