//! Main authentication service implementation

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use crate::domain::value_objects::AuthOutcome;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{AccountRepository, LoginAttemptRepository};
use crate::services::audit::LoginAudit;
use crate::services::password::PasswordHasher;

/// Authentication service for credential verification
///
/// Request-scoped: every call is an independent unit of work over the
/// shared repositories. Password verification runs on the blocking
/// thread pool and never holds a store handle across the hash.
pub struct AuthService<C, A, H>
where
    C: AccountRepository,
    A: LoginAttemptRepository,
    H: PasswordHasher + 'static,
{
    /// Credential store
    accounts: Arc<C>,
    /// Audit trail for authentication attempts
    audit: LoginAudit<A>,
    /// Password hashing policy
    hasher: Arc<H>,
}

impl<C, A, H> AuthService<C, A, H>
where
    C: AccountRepository,
    A: LoginAttemptRepository,
    H: PasswordHasher + 'static,
{
    /// Create a new authentication service
    pub fn new(accounts: Arc<C>, audit_repository: Arc<A>, hasher: Arc<H>) -> Self {
        Self {
            accounts,
            audit: LoginAudit::new(audit_repository),
            hasher,
        }
    }

    /// Verify a username/password pair
    ///
    /// The outcome never distinguishes an unknown username from a wrong
    /// password. Storage failures propagate as `DomainError::Storage` so
    /// callers can tell "try again" apart from "wrong credentials".
    ///
    /// # Arguments
    /// * `username` - submitted login name (case-sensitive)
    /// * `password` - submitted plaintext password
    /// * `source_address` - network address for the audit trail
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
        source_address: &str,
    ) -> DomainResult<AuthOutcome> {
        // Input validation happens before any store or audit access.
        if username.trim().is_empty() {
            return Err(AuthError::MissingUsername.into());
        }
        if password.trim().is_empty() {
            return Err(AuthError::MissingPassword.into());
        }

        let account = match self.accounts.find_by_username(username).await? {
            Some(account) => account,
            None => {
                self.record_attempt(None, false, source_address).await;
                return Ok(AuthOutcome::InvalidCredentials);
            }
        };

        // Inactive or unapproved accounts are rejected without consulting
        // the hasher at all.
        if !account.can_authenticate() {
            self.record_attempt(Some(account.id), false, source_address)
                .await;
            return Ok(AuthOutcome::AccountInactive);
        }

        let verified = self
            .verify_password(password, &account.password_digest)
            .await?;
        self.record_attempt(Some(account.id), verified, source_address)
            .await;

        if !verified {
            return Ok(AuthOutcome::InvalidCredentials);
        }

        // Last-write-wins; the credentials already verified, so a failed
        // stamp is reported but does not change the outcome.
        let now = Utc::now();
        if let Err(e) = self.accounts.update_last_login(account.id, now).await {
            warn!(account_id = account.id, error = %e, "failed to update last login");
        }

        let mut account = account;
        account.record_login(now);
        Ok(AuthOutcome::Success(account))
    }

    /// Run bcrypt verification on the blocking thread pool
    async fn verify_password(&self, password: &str, digest: &str) -> DomainResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let digest = digest.to_owned();

        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("password verification task failed: {e}"),
            })??;
        Ok(verified)
    }

    /// Best-effort audit write; failures go to the observability sink
    async fn record_attempt(&self, account_id: Option<i64>, successful: bool, source: &str) {
        if let Err(e) = self.audit.record(account_id, successful, source).await {
            warn!(?account_id, successful, error = %e, "failed to record login attempt");
        }
    }
}
