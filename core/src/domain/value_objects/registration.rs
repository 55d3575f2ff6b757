//! Registration form and receipt value objects.

use serde::{Deserialize, Serialize};

/// The full registration payload as submitted by a caller
///
/// Department, designation and date of birth arrive as wire strings and
/// are parsed during validation so that a bad value yields its specific
/// error instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<String>,
    pub faculty_id: Option<String>,
    pub department: String,
    pub designation: String,
    pub years_experience: i64,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

/// Public identifiers of a freshly created account
///
/// Deliberately excludes everything else, in particular the password
/// digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub account_id: i64,
    pub username: String,
    pub email: String,
}
