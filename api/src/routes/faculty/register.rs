//! Handler for POST /api/v1/faculty/register

use actix_web::{web, HttpResponse};

use crate::dto::faculty::{RegisterRequest, RegisterResponse};
use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

use sb_core::repositories::{AccountRepository, LoginAttemptRepository};
use sb_core::services::password::PasswordHasher;
use sb_shared::types::response::ApiResponse;

/// Register a new faculty account
///
/// The created account starts in the pending state and cannot log in
/// until an administrator approves and activates it.
///
/// # Responses
/// * `200` - account created, returns id/username/email
/// * `400` - the first violated validation rule, as a specific code
/// * `409` - username, email or faculty ID already registered
/// * `503` - storage unavailable, safe to retry
pub async fn register<C, A, H>(
    state: web::Data<AppState<C, A, H>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    C: AccountRepository + 'static,
    A: LoginAttemptRepository + 'static,
    H: PasswordHasher + 'static,
{
    let request = request.into_inner();
    log::info!(
        "registration attempt for: {} ({}), department: {}",
        request.full_name,
        request.email,
        request.department
    );

    match state.registration_service.register(request.into()).await {
        Ok(receipt) => {
            log::info!(
                "registration successful, account id: {}, username: {}",
                receipt.account_id,
                receipt.username
            );
            HttpResponse::Ok().json(ApiResponse::success(RegisterResponse::from_receipt(receipt)))
        }
        Err(error) => {
            log::warn!("registration failed: {}", error);
            domain_error_response(&error)
        }
    }
}
