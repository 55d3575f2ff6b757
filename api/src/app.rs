//! Application factory
//!
//! Builds the Actix-web application with all routes and middleware
//! wired against the shared application state.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::cors::create_cors;
use crate::routes::auth::login::login;
use crate::routes::faculty::availability::{check_email, check_username};
use crate::routes::faculty::register::register;
use crate::routes::AppState;

use sb_core::repositories::{AccountRepository, LoginAttemptRepository};
use sb_core::services::password::PasswordHasher;

/// Create and configure the application with all dependencies
pub fn create_app<C, A, H>(
    app_state: web::Data<AppState<C, A, H>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    C: AccountRepository + 'static,
    A: LoginAttemptRepository + 'static,
    H: PasswordHasher + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth").route("/login", web::post().to(login::<C, A, H>)),
                )
                .service(
                    web::scope("/faculty")
                        .route("/register", web::post().to(register::<C, A, H>))
                        .route(
                            "/check-username",
                            web::get().to(check_username::<C, A, H>),
                        )
                        .route("/check-email", web::get().to(check_email::<C, A, H>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "seminar-book-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
