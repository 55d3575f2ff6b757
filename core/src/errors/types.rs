//! Error type definitions for authentication and registration operations
//!
//! Every variant carries a caller-safe message and maps to a stable
//! SCREAMING_SNAKE code; the HTTP layer attaches status codes on top.

use std::fmt;
use thiserror::Error;

use sb_shared::types::response::ErrorResponse;

/// Authentication input errors, detected before any storage access
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username is required")]
    MissingUsername,

    #[error("Password is required")]
    MissingPassword,
}

impl AuthError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingUsername => "MISSING_USERNAME",
            Self::MissingPassword => "MISSING_PASSWORD",
        }
    }
}

/// Registration form errors, ordered to match the validation sequence
///
/// Each variant identifies the first rule a submitted form violated.
/// Uniqueness collisions are not here; they are `DomainError::Duplicate`
/// because the storage layer is their authority.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Full name is required")]
    MissingFullName,

    #[error("Email address is required")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Phone number is required")]
    MissingPhone,

    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhone,

    #[error("Invalid department selected")]
    InvalidDepartment,

    #[error("Invalid designation selected")]
    InvalidDesignation,

    #[error("Years of experience must be a non-negative number")]
    InvalidExperience,

    #[error("Username is required")]
    MissingUsername,

    #[error("Username must be 4-20 characters with letters, numbers, dots, underscores, or hyphens only")]
    InvalidUsername,

    #[error("Password is required")]
    MissingPassword,

    #[error("Password must be at least 8 characters long")]
    WeakPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("You must agree to the terms and conditions")]
    TermsNotAccepted,

    #[error("Date of birth must be a valid date in YYYY-MM-DD format")]
    InvalidDateOfBirth,
}

impl RegistrationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingFullName => "MISSING_FULL_NAME",
            Self::MissingEmail => "MISSING_EMAIL",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::MissingPhone => "MISSING_PHONE",
            Self::InvalidPhone => "INVALID_PHONE",
            Self::InvalidDepartment => "INVALID_DEPARTMENT",
            Self::InvalidDesignation => "INVALID_DESIGNATION",
            Self::InvalidExperience => "INVALID_EXPERIENCE",
            Self::MissingUsername => "MISSING_USERNAME",
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::MissingPassword => "MISSING_PASSWORD",
            Self::WeakPassword => "WEAK_PASSWORD",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::TermsNotAccepted => "TERMS_NOT_ACCEPTED",
            Self::InvalidDateOfBirth => "INVALID_DATE_OF_BIRTH",
        }
    }
}

/// Which uniqueness constraint a rejected write collided with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Username,
    Email,
    FacultyId,
}

impl DuplicateField {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Username => "USERNAME_EXISTS",
            Self::Email => "EMAIL_EXISTS",
            Self::FacultyId => "FACULTY_ID_EXISTS",
        }
    }
}

impl fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Username => "Username",
            Self::Email => "Email address",
            Self::FacultyId => "Faculty ID",
        };
        f.write_str(name)
    }
}

/// Convert a domain error into the shared API error envelope
impl From<&super::DomainError> for ErrorResponse {
    fn from(err: &super::DomainError) -> Self {
        ErrorResponse::new(err.code(), err.to_string())
    }
}
