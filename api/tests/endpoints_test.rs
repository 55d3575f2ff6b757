//! HTTP-level tests for the login, registration and availability
//! endpoints, running the real application over the in-memory store.

use std::sync::Arc;

use actix_web::{test, web};
use serde_json::{json, Value};

use sb_api::app::create_app;
use sb_api::routes::AppState;
use sb_core::domain::entities::account::RegistrationStatus;
use sb_core::repositories::account::MockAccountRepository;
use sb_core::repositories::login_attempt::MockLoginAttemptRepository;
use sb_core::repositories::AccountRepository;
use sb_core::services::auth::AuthService;
use sb_core::services::password::BcryptHasher;
use sb_core::services::registration::RegistrationService;

type TestState = AppState<MockAccountRepository, MockLoginAttemptRepository, BcryptHasher>;

fn test_state() -> (Arc<MockAccountRepository>, web::Data<TestState>) {
    let accounts = Arc::new(MockAccountRepository::new());
    let attempts = Arc::new(MockLoginAttemptRepository::new());
    let hasher = Arc::new(BcryptHasher::fast_for_tests());

    let state = web::Data::new(AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::clone(&accounts),
            attempts,
            Arc::clone(&hasher),
        )),
        registration_service: Arc::new(RegistrationService::new(Arc::clone(&accounts), hasher)),
    });
    (accounts, state)
}

fn registration_body() -> Value {
    json!({
        "fullName": "Dr. A",
        "email": "f1@example.edu",
        "phone": "9876543210",
        "department": "BCA",
        "designation": "lecturer",
        "yearsExperience": 5,
        "username": "faculty001",
        "password": "longpass1",
        "confirmPassword": "longpass1",
        "agreeToTerms": true
    })
}

#[actix_web::test]
async fn test_register_then_login_lifecycle() {
    let (accounts, state) = test_state();
    let app = test::init_service(create_app(state.clone())).await;

    // Register
    let req = test::TestRequest::post()
        .uri("/api/v1/faculty/register")
        .set_json(registration_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    let account_id = body["data"]["accountId"].as_i64().unwrap();

    // Pending accounts cannot log in
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"username": "faculty001", "password": "longpass1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 403);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], json!("ACCOUNT_INACTIVE"));

    // Approve and activate, then log in
    state
        .registration_service
        .set_registration_status(account_id, RegistrationStatus::Approved)
        .await
        .unwrap();
    accounts.update_activation(account_id, true).await.unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"username": "faculty001", "password": "longpass1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["account"]["fullName"], json!("Dr. A"));
    assert_eq!(body["data"]["account"]["department"], json!("BCA"));
}

#[actix_web::test]
async fn test_login_with_unknown_user_is_unauthorized() {
    let (_, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"username": "ghost", "password": "longpass1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], json!("INVALID_CREDENTIALS"));
}

#[actix_web::test]
async fn test_login_with_missing_fields_is_bad_request() {
    let (_, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"username": "", "password": "longpass1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], json!("MISSING_USERNAME"));
}

#[actix_web::test]
async fn test_register_weak_password_is_rejected_with_code() {
    let (accounts, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let mut body = registration_body();
    body["password"] = json!("short");
    body["confirmPassword"] = json!("short");

    let req = test::TestRequest::post()
        .uri("/api/v1/faculty/register")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], json!("WEAK_PASSWORD"));

    // Nothing was stored
    assert!(accounts.is_empty().await);
}

#[actix_web::test]
async fn test_duplicate_registration_conflicts() {
    let (_, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/faculty/register")
        .set_json(registration_body())
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let mut second = registration_body();
    second["email"] = json!("other@example.edu");
    let req = test::TestRequest::post()
        .uri("/api/v1/faculty/register")
        .set_json(second)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 409);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], json!("USERNAME_EXISTS"));
}

#[actix_web::test]
async fn test_availability_probes() {
    let (_, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/faculty/check-username?username=faculty001")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["available"], json!(true));

    let req = test::TestRequest::post()
        .uri("/api/v1/faculty/register")
        .set_json(registration_body())
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::get()
        .uri("/api/v1/faculty/check-username?username=faculty001")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["available"], json!(false));

    // Malformed input is reported as unavailable, not as an error
    let req = test::TestRequest::get()
        .uri("/api/v1/faculty/check-username?username=ab")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["available"], json!(false));

    let req = test::TestRequest::get()
        .uri("/api/v1/faculty/check-email?email=F1@EXAMPLE.EDU")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["available"], json!(false));
}

#[actix_web::test]
async fn test_health_endpoint() {
    let (_, state) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
