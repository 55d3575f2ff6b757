//! Mapping from domain errors to HTTP responses
//!
//! Every domain error carries a stable code and a caller-safe message;
//! this module only decides the HTTP status and masks messages for the
//! infrastructure kinds, which may embed internal detail.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use sb_core::errors::DomainError;
use sb_shared::types::response::ApiResponse;

/// Build the HTTP response for a domain error
pub fn domain_error_response(err: &DomainError) -> HttpResponse {
    let status = status_for(err);
    let message = match err {
        DomainError::Storage { .. } => {
            "A temporary storage problem occurred. Please try again.".to_string()
        }
        DomainError::PasswordHash { .. } | DomainError::Internal { .. } => {
            "An unexpected error occurred. Please try again.".to_string()
        }
        other => other.to_string(),
    };

    HttpResponse::build(status).json(ApiResponse::<()>::error(message, err.code()))
}

/// HTTP status for each error kind
fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::Auth(_) | DomainError::Registration(_) => StatusCode::BAD_REQUEST,
        DomainError::Duplicate(_) | DomainError::InvalidStateTransition { .. } => {
            StatusCode::CONFLICT
        }
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Storage { .. } => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::PasswordHash { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_core::errors::{DuplicateField, RegistrationError};

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&DomainError::Registration(RegistrationError::WeakPassword)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::Duplicate(DuplicateField::Email)),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&DomainError::NotFound {
                resource: "account 9".to_string()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DomainError::Storage {
                message: "pool timed out".to_string()
            }),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_storage_detail_is_masked() {
        let response = domain_error_response(&DomainError::Storage {
            message: "connection refused on 10.0.0.5:3306".to_string(),
        });
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
