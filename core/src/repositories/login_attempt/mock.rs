//! In-memory implementation of LoginAttemptRepository for tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::login_attempt::LoginAttempt;
use crate::errors::DomainError;

use super::trait_::LoginAttemptRepository;

/// In-memory login attempt repository with an inspectable record
pub struct MockLoginAttemptRepository {
    attempts: Arc<RwLock<Vec<LoginAttempt>>>,
    fail: AtomicBool,
}

impl MockLoginAttemptRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(RwLock::new(Vec::new())),
            fail: AtomicBool::new(false),
        }
    }

    /// Make every subsequent append fail with a storage error
    pub fn fail_with_storage_error(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of everything recorded so far, in append order
    pub async fn recorded(&self) -> Vec<LoginAttempt> {
        self.attempts.read().await.clone()
    }
}

impl Default for MockLoginAttemptRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoginAttemptRepository for MockLoginAttemptRepository {
    async fn append(&self, attempt: &LoginAttempt) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::Storage {
                message: "simulated audit storage failure".to_string(),
            });
        }
        self.attempts.write().await.push(attempt.clone());
        Ok(())
    }
}
