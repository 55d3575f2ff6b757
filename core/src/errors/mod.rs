//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{AuthError, DuplicateField, RegistrationError};

use thiserror::Error;

use crate::domain::entities::account::RegistrationStatus;

/// Core domain errors
///
/// `Storage` is the only transient kind; everything else reports a fact
/// about the request that retrying will not change.
#[derive(Error, Debug)]
pub enum DomainError {
    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// A storage-enforced uniqueness constraint rejected a write
    #[error("{0} is already registered")]
    Duplicate(DuplicateField),

    #[error("Password hashing failed: {message}")]
    PasswordHash { message: String },

    #[error("Registration status cannot change from {from} to {to}")]
    InvalidStateTransition {
        from: RegistrationStatus,
        to: RegistrationStatus,
    },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Transient infrastructure failure; the caller may retry
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Stable machine-readable code for API responses and logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::Auth(e) => e.code(),
            Self::Registration(e) => e.code(),
            Self::Duplicate(field) => field.code(),
            Self::PasswordHash { .. } => "PASSWORD_HASH_FAILURE",
            Self::InvalidStateTransition { .. } => "INVALID_STATE_TRANSITION",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Storage { .. } => "DATABASE_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
