//! Login request and response shapes

use serde::{Deserialize, Serialize};
use validator::Validate;

use sb_core::domain::value_objects::AccountSummary;

/// Login form submitted by the desktop and web clients
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
    pub account: AccountSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_core::domain::entities::account::Department;

    #[test]
    fn test_login_request_requires_both_fields() {
        let request = LoginRequest {
            username: String::new(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_err());

        let request = LoginRequest {
            username: "faculty001".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_login_response_uses_camel_case_summary() {
        let response = LoginResponse {
            message: "Login successful".to_string(),
            username: "faculty001".to_string(),
            account: AccountSummary {
                id: 1,
                username: "faculty001".to_string(),
                full_name: "Dr. A".to_string(),
                department: Department::Bca,
            },
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"fullName\":\"Dr. A\""));
        assert!(json.contains("\"department\":\"BCA\""));
    }
}
