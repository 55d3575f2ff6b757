//! Handler for POST /api/v1/auth/login

use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::domain_error_response;
use crate::handlers::extract_client_ip;
use crate::routes::AppState;

use sb_core::domain::value_objects::{AccountSummary, AuthOutcome};
use sb_core::repositories::{AccountRepository, LoginAttemptRepository};
use sb_core::services::password::PasswordHasher;
use sb_shared::types::response::ApiResponse;

/// Authenticate a faculty member
///
/// # Request Body
///
/// ```json
/// {
///     "username": "faculty001",
///     "password": "longpass1"
/// }
/// ```
///
/// # Responses
/// * `200` - credentials verified, returns the account summary
/// * `400` - missing username or password
/// * `401` - unknown username or wrong password (indistinguishable)
/// * `403` - valid credentials but the account is not yet usable
/// * `503` - storage unavailable, safe to retry
pub async fn login<C, A, H>(
    req: HttpRequest,
    state: web::Data<AppState<C, A, H>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    C: AccountRepository + 'static,
    A: LoginAttemptRepository + 'static,
    H: PasswordHasher + 'static,
{
    let request_id = Uuid::new_v4();
    let client_ip = extract_client_ip(&req);

    // Reject structurally empty requests before the service sees them;
    // the service applies the same rule to whitespace-only input.
    if request.0.validate().is_err() {
        let (message, code) = if request.username.is_empty() {
            ("Username is required", "MISSING_USERNAME")
        } else {
            ("Password is required", "MISSING_PASSWORD")
        };
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(message, code));
    }

    log::info!(
        "[{}] login attempt for user: {}, ip: {}",
        request_id,
        request.username,
        client_ip
    );

    match state
        .auth_service
        .authenticate(&request.username, &request.password, &client_ip)
        .await
    {
        Ok(AuthOutcome::Success(account)) => {
            log::info!(
                "[{}] login successful for user: {}",
                request_id,
                account.username
            );
            HttpResponse::Ok().json(ApiResponse::success(LoginResponse {
                message: "Login successful".to_string(),
                username: account.username.clone(),
                account: AccountSummary::from(&account),
            }))
        }
        Ok(AuthOutcome::InvalidCredentials) => {
            log::warn!("[{}] login failed for user: {}", request_id, request.username);
            HttpResponse::Unauthorized().json(ApiResponse::<()>::error(
                "Invalid username or password",
                "INVALID_CREDENTIALS",
            ))
        }
        Ok(AuthOutcome::AccountInactive) => {
            log::warn!(
                "[{}] login rejected for inactive account: {}",
                request_id,
                request.username
            );
            HttpResponse::Forbidden().json(ApiResponse::<()>::error(
                "Account is not active. Please wait for admin approval.",
                "ACCOUNT_INACTIVE",
            ))
        }
        Err(error) => {
            log::error!(
                "[{}] login error for user: {}, ip: {}, error: {}",
                request_id,
                request.username,
                client_ip,
                error
            );
            domain_error_response(&error)
        }
    }
}
