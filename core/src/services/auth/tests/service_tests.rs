//! Unit tests for the authentication service

use std::sync::Arc;

use crate::domain::entities::account::{
    Department, Designation, NewAccount, RegistrationStatus,
};
use crate::domain::value_objects::AuthOutcome;
use crate::errors::{AuthError, DomainError};
use crate::repositories::account::MockAccountRepository;
use crate::repositories::login_attempt::MockLoginAttemptRepository;
use crate::repositories::AccountRepository;
use crate::services::auth::AuthService;
use crate::services::password::{BcryptHasher, PasswordHasher};

type TestService = AuthService<MockAccountRepository, MockLoginAttemptRepository, BcryptHasher>;

struct Fixture {
    accounts: Arc<MockAccountRepository>,
    attempts: Arc<MockLoginAttemptRepository>,
    service: TestService,
}

fn fixture() -> Fixture {
    let accounts = Arc::new(MockAccountRepository::new());
    let attempts = Arc::new(MockLoginAttemptRepository::new());
    let hasher = Arc::new(BcryptHasher::fast_for_tests());
    let service = AuthService::new(Arc::clone(&accounts), Arc::clone(&attempts), hasher);
    Fixture {
        accounts,
        attempts,
        service,
    }
}

fn new_account(username: &str, password: &str) -> NewAccount {
    let hasher = BcryptHasher::fast_for_tests();
    NewAccount {
        username: username.to_string(),
        password_digest: hasher.hash(password).unwrap(),
        email: format!("{username}@example.edu"),
        full_name: "Dr. A".to_string(),
        phone_number: "9876543210".to_string(),
        date_of_birth: None,
        faculty_id_number: None,
        department: Department::Bca,
        designation: Designation::Lecturer,
        years_experience: 5,
        registration_status: RegistrationStatus::Pending,
        is_active: false,
    }
}

async fn insert_usable(fixture: &Fixture, username: &str, password: &str) -> i64 {
    let mut account = new_account(username, password);
    account.registration_status = RegistrationStatus::Approved;
    account.is_active = true;
    fixture.accounts.insert(account).await.unwrap().id
}

#[tokio::test]
async fn test_blank_credentials_are_rejected_before_storage() {
    let fx = fixture();

    let err = fx.service.authenticate("", "pw", "127.0.0.1").await;
    assert!(matches!(
        err,
        Err(DomainError::Auth(AuthError::MissingUsername))
    ));

    let err = fx.service.authenticate("user", "   ", "127.0.0.1").await;
    assert!(matches!(
        err,
        Err(DomainError::Auth(AuthError::MissingPassword))
    ));

    // No store lookups happened and nothing hit the audit trail.
    assert!(fx.attempts.recorded().await.is_empty());
}

#[tokio::test]
async fn test_unknown_username_yields_invalid_credentials() {
    let fx = fixture();

    let outcome = fx
        .service
        .authenticate("ghost", "longpass1", "203.0.113.9")
        .await
        .unwrap();
    assert_eq!(outcome, AuthOutcome::InvalidCredentials);

    let recorded = fx.attempts.recorded().await;
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].account_id, None);
    assert!(!recorded[0].successful);
    assert_eq!(recorded[0].source_address, "203.0.113.9");
}

#[tokio::test]
async fn test_pending_account_is_inactive_even_with_correct_password() {
    let fx = fixture();
    let id = fx
        .accounts
        .insert(new_account("faculty001", "longpass1"))
        .await
        .unwrap()
        .id;

    let outcome = fx
        .service
        .authenticate("faculty001", "longpass1", "127.0.0.1")
        .await
        .unwrap();
    assert_eq!(outcome, AuthOutcome::AccountInactive);

    let recorded = fx.attempts.recorded().await;
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].account_id, Some(id));
    assert!(!recorded[0].successful);
}

#[tokio::test]
async fn test_wrong_password_yields_invalid_credentials() {
    let fx = fixture();
    let id = insert_usable(&fx, "faculty001", "longpass1").await;

    let outcome = fx
        .service
        .authenticate("faculty001", "wrongpass", "127.0.0.1")
        .await
        .unwrap();
    assert_eq!(outcome, AuthOutcome::InvalidCredentials);

    let recorded = fx.attempts.recorded().await;
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].account_id, Some(id));
    assert!(!recorded[0].successful);
}

#[tokio::test]
async fn test_username_lookup_is_case_sensitive() {
    let fx = fixture();
    insert_usable(&fx, "faculty001", "longpass1").await;

    let outcome = fx
        .service
        .authenticate("FACULTY001", "longpass1", "127.0.0.1")
        .await
        .unwrap();
    assert_eq!(outcome, AuthOutcome::InvalidCredentials);
}

#[tokio::test]
async fn test_successful_login_updates_last_login() {
    let fx = fixture();
    let id = insert_usable(&fx, "faculty001", "longpass1").await;

    let outcome = fx
        .service
        .authenticate("faculty001", "longpass1", "127.0.0.1")
        .await
        .unwrap();
    let account = match outcome {
        AuthOutcome::Success(account) => account,
        other => panic!("expected success, got {other:?}"),
    };
    assert_eq!(account.id, id);
    assert!(account.last_login.is_some());

    // The stamp is persisted, not just set on the returned entity.
    let stored = fx.accounts.find_by_id(id).await.unwrap().unwrap();
    assert!(stored.last_login.is_some());

    let recorded = fx.attempts.recorded().await;
    assert_eq!(recorded.len(), 1);
    assert!(recorded[0].successful);
    assert_eq!(recorded[0].account_id, Some(id));
}

#[tokio::test]
async fn test_storage_failure_is_not_invalid_credentials() {
    let fx = fixture();
    fx.accounts.fail_with_storage_error(true);

    let result = fx
        .service
        .authenticate("faculty001", "longpass1", "127.0.0.1")
        .await;
    assert!(matches!(result, Err(DomainError::Storage { .. })));
}

#[tokio::test]
async fn test_audit_failure_does_not_block_authentication() {
    let fx = fixture();
    insert_usable(&fx, "faculty001", "longpass1").await;
    fx.attempts.fail_with_storage_error(true);

    let outcome = fx
        .service
        .authenticate("faculty001", "longpass1", "127.0.0.1")
        .await
        .unwrap();
    assert!(outcome.is_success());
}
