//! Login attempt repository trait for the append-only audit trail.

use async_trait::async_trait;

use crate::domain::entities::login_attempt::LoginAttempt;
use crate::errors::DomainError;

/// Repository trait for persisting login attempts
///
/// Append-only by contract: no read, update or delete operations. The
/// core writes entries for external security tooling to consume.
#[async_trait]
pub trait LoginAttemptRepository: Send + Sync {
    /// Append a login attempt record
    async fn append(&self, attempt: &LoginAttempt) -> Result<(), DomainError>;
}
