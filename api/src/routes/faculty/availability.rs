//! Handlers for the signup form's availability probes
//!
//! GET /api/v1/faculty/check-username and /check-email. Format problems
//! come back as 200 with `available: false`, matching what the signup
//! form expects while the user is still typing.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::dto::faculty::AvailabilityResponse;
use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

use sb_core::errors::DomainError;
use sb_core::repositories::{AccountRepository, LoginAttemptRepository};
use sb_core::services::password::PasswordHasher;
use sb_shared::types::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct UsernameQuery {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Check whether a username can still be registered
pub async fn check_username<C, A, H>(
    state: web::Data<AppState<C, A, H>>,
    query: web::Query<UsernameQuery>,
) -> HttpResponse
where
    C: AccountRepository + 'static,
    A: LoginAttemptRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state
        .registration_service
        .username_available(&query.username)
        .await
    {
        Ok(available) => {
            let message = if available {
                "Username is available"
            } else {
                "Username is already taken"
            };
            HttpResponse::Ok().json(ApiResponse::success(AvailabilityResponse {
                available,
                message: message.to_string(),
            }))
        }
        Err(DomainError::Registration(e)) => {
            HttpResponse::Ok().json(ApiResponse::success(AvailabilityResponse {
                available: false,
                message: e.to_string(),
            }))
        }
        Err(error) => domain_error_response(&error),
    }
}

/// Check whether an email can still be registered
pub async fn check_email<C, A, H>(
    state: web::Data<AppState<C, A, H>>,
    query: web::Query<EmailQuery>,
) -> HttpResponse
where
    C: AccountRepository + 'static,
    A: LoginAttemptRepository + 'static,
    H: PasswordHasher + 'static,
{
    match state
        .registration_service
        .email_available(&query.email)
        .await
    {
        Ok(available) => {
            let message = if available {
                "Email is available"
            } else {
                "Email is already registered"
            };
            HttpResponse::Ok().json(ApiResponse::success(AvailabilityResponse {
                available,
                message: message.to_string(),
            }))
        }
        Err(DomainError::Registration(e)) => {
            HttpResponse::Ok().json(ApiResponse::success(AvailabilityResponse {
                available: false,
                message: e.to_string(),
            }))
        }
        Err(error) => domain_error_response(&error),
    }
}
