//! Authentication outcome value objects.

use serde::{Deserialize, Serialize};

use crate::domain::entities::account::{Account, Department};

/// Result of a credential check
///
/// Unknown usernames and wrong passwords both surface as
/// `InvalidCredentials`, so a caller cannot probe which usernames exist.
/// Infrastructure failures are not outcomes; they propagate as errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// Credentials verified against an approved, active account
    Success(Account),
    /// Unknown username or wrong password
    InvalidCredentials,
    /// Credentials may be fine, but the account is not approved and active
    AccountInactive,
}

impl AuthOutcome {
    /// Whether authentication succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// The public, caller-safe slice of an authenticated account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub department: Department,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            full_name: account.full_name.clone(),
            department: account.department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::account::{Designation, RegistrationStatus};
    use chrono::Utc;

    #[test]
    fn test_summary_from_account() {
        let account = Account {
            id: 7,
            username: "faculty001".to_string(),
            password_digest: "$2b$04$xyz".to_string(),
            email: "f1@example.edu".to_string(),
            full_name: "Dr. A".to_string(),
            phone_number: "9876543210".to_string(),
            date_of_birth: None,
            faculty_id_number: None,
            department: Department::Bca,
            designation: Designation::Lecturer,
            years_experience: 5,
            registration_status: RegistrationStatus::Approved,
            is_active: true,
            created_at: Utc::now(),
            last_login: None,
        };

        let summary = AccountSummary::from(&account);
        assert_eq!(summary.id, 7);
        assert_eq!(summary.username, "faculty001");
        assert_eq!(summary.department, Department::Bca);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"fullName\":\"Dr. A\""));
        assert!(!json.contains("password"));
        assert!(!json.contains("email"));
    }
}
