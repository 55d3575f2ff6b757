//! HTTP route handlers

pub mod auth;
pub mod faculty;

use std::sync::Arc;

use sb_core::repositories::{AccountRepository, LoginAttemptRepository};
use sb_core::services::auth::AuthService;
use sb_core::services::password::PasswordHasher;
use sb_core::services::registration::RegistrationService;

/// Application state holding the shared services
pub struct AppState<C, A, H>
where
    C: AccountRepository,
    A: LoginAttemptRepository,
    H: PasswordHasher + 'static,
{
    pub auth_service: Arc<AuthService<C, A, H>>,
    pub registration_service: Arc<RegistrationService<C, H>>,
}
