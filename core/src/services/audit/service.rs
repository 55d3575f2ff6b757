//! Audit service recording authentication attempts.
//!
//! Writes are best-effort from the caller's point of view: the
//! authentication flow reports a failed append to the observability
//! sink and carries on with its primary result.

use std::sync::Arc;

use crate::domain::entities::login_attempt::LoginAttempt;
use crate::errors::DomainResult;
use crate::repositories::LoginAttemptRepository;

/// Service appending login attempts to the audit trail
pub struct LoginAudit<R>
where
    R: LoginAttemptRepository,
{
    repository: Arc<R>,
}

impl<R> LoginAudit<R>
where
    R: LoginAttemptRepository,
{
    /// Create a new audit service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Record an authentication attempt
    ///
    /// `account_id` is `None` when the username resolved to no account.
    pub async fn record(
        &self,
        account_id: Option<i64>,
        successful: bool,
        source_address: &str,
    ) -> DomainResult<()> {
        let attempt = LoginAttempt::new(account_id, successful, source_address);
        self.repository.append(&attempt).await
    }
}
