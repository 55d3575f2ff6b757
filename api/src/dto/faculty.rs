//! Registration and availability request/response shapes

use serde::{Deserialize, Serialize};

use sb_core::domain::value_objects::{RegistrationForm, RegistrationReceipt};

/// Registration form as submitted by the signup page
///
/// Field names follow the frontend's camelCase convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub faculty_id: Option<String>,
    pub department: String,
    pub designation: String,
    pub years_experience: i64,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

impl From<RegisterRequest> for RegistrationForm {
    fn from(request: RegisterRequest) -> Self {
        Self {
            full_name: request.full_name,
            email: request.email,
            phone: request.phone,
            date_of_birth: request.date_of_birth,
            faculty_id: request.faculty_id,
            department: request.department,
            designation: request.designation,
            years_experience: request.years_experience,
            username: request.username,
            password: request.password,
            confirm_password: request.confirm_password,
            agree_to_terms: request.agree_to_terms,
        }
    }
}

/// Successful registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub account_id: i64,
    pub username: String,
    pub email: String,
}

impl RegisterResponse {
    pub fn from_receipt(receipt: RegistrationReceipt) -> Self {
        Self {
            message: "Faculty account created successfully! Please wait for admin approval."
                .to_string(),
            account_id: receipt.account_id,
            username: receipt.username,
            email: receipt.email,
        }
    }
}

/// Username/email availability probe result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_frontend_field_names() {
        let json = r#"{
            "fullName": "Dr. A",
            "email": "f1@example.edu",
            "phone": "9876543210",
            "facultyId": "FAC-42",
            "department": "BCA",
            "designation": "lecturer",
            "yearsExperience": 5,
            "username": "faculty001",
            "password": "longpass1",
            "confirmPassword": "longpass1",
            "agreeToTerms": true
        }"#;

        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.full_name, "Dr. A");
        assert_eq!(request.faculty_id.as_deref(), Some("FAC-42"));
        assert_eq!(request.date_of_birth, None);

        let form: RegistrationForm = request.into();
        assert_eq!(form.years_experience, 5);
        assert!(form.agree_to_terms);
    }
}
