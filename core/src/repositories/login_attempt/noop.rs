//! No-op implementation of LoginAttemptRepository for when audit storage
//! is not wired up

use async_trait::async_trait;

use crate::domain::entities::login_attempt::LoginAttempt;
use crate::errors::DomainError;

use super::trait_::LoginAttemptRepository;

/// No-op login attempt repository
pub struct NoOpLoginAttemptRepository;

impl NoOpLoginAttemptRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpLoginAttemptRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoginAttemptRepository for NoOpLoginAttemptRepository {
    async fn append(&self, _attempt: &LoginAttempt) -> Result<(), DomainError> {
        Ok(())
    }
}
