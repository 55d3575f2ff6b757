//! Login attempt entity for the append-only authentication audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single authentication attempt, successful or not
///
/// `account_id` is `None` when the submitted username did not resolve to
/// any account. Entries are append-only; nothing in the core mutates or
/// deletes them once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginAttempt {
    /// Unique identifier for the log entry
    pub id: Uuid,

    /// The account the attempt resolved to, if any
    pub account_id: Option<i64>,

    /// Whether the credentials verified
    pub successful: bool,

    /// Network address the attempt originated from
    pub source_address: String,

    /// Timestamp when the attempt occurred
    pub created_at: DateTime<Utc>,
}

impl LoginAttempt {
    /// Create a new login attempt record
    pub fn new(
        account_id: Option<i64>,
        successful: bool,
        source_address: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            successful,
            source_address: source_address.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_for_unknown_account() {
        let attempt = LoginAttempt::new(None, false, "203.0.113.9");
        assert!(attempt.account_id.is_none());
        assert!(!attempt.successful);
        assert_eq!(attempt.source_address, "203.0.113.9");
    }

    #[test]
    fn test_attempt_ids_are_unique() {
        let a = LoginAttempt::new(Some(1), true, "127.0.0.1");
        let b = LoginAttempt::new(Some(1), true, "127.0.0.1");
        assert_ne!(a.id, b.id);
    }
}
