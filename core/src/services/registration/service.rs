//! Main registration service implementation

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use sb_shared::utils::validation;

use crate::domain::entities::account::{
    Department, Designation, NewAccount, RegistrationStatus, MIN_PASSWORD_LENGTH,
};
use crate::domain::value_objects::{RegistrationForm, RegistrationReceipt};
use crate::errors::{DomainError, DomainResult, DuplicateField, RegistrationError};
use crate::repositories::AccountRepository;
use crate::services::password::PasswordHasher;

/// The validated, parsed portion of a registration form
struct ParsedForm {
    department: Department,
    designation: Designation,
    years_experience: u32,
    date_of_birth: Option<NaiveDate>,
    faculty_id: Option<String>,
}

/// Registration service creating pending faculty accounts
pub struct RegistrationService<C, H>
where
    C: AccountRepository,
    H: PasswordHasher + 'static,
{
    /// Credential store
    accounts: Arc<C>,
    /// Password hashing policy
    hasher: Arc<H>,
}

impl<C, H> RegistrationService<C, H>
where
    C: AccountRepository,
    H: PasswordHasher + 'static,
{
    /// Create a new registration service
    pub fn new(accounts: Arc<C>, hasher: Arc<H>) -> Self {
        Self { accounts, hasher }
    }

    /// Validate a registration form and create a pending account
    ///
    /// Validation short-circuits on the first failing rule, in a fixed
    /// order, and nothing touches storage until every format rule has
    /// passed. The store's unique indexes remain the authority for
    /// uniqueness under concurrency; the ordered existence checks only
    /// decide which duplicate a caller hears about first.
    pub async fn register(&self, form: RegistrationForm) -> DomainResult<RegistrationReceipt> {
        let parsed = Self::validate(&form)?;

        if self.accounts.exists_by_email(&form.email).await? {
            return Err(DomainError::Duplicate(DuplicateField::Email));
        }
        if self.accounts.exists_by_username(&form.username).await? {
            return Err(DomainError::Duplicate(DuplicateField::Username));
        }
        if let Some(faculty_id) = &parsed.faculty_id {
            if self.accounts.exists_by_faculty_id(faculty_id).await? {
                return Err(DomainError::Duplicate(DuplicateField::FacultyId));
            }
        }

        let password_digest = self.hash_password(&form.password).await?;

        let account = self
            .accounts
            .insert(NewAccount {
                username: form.username,
                password_digest,
                email: form.email,
                full_name: form.full_name.trim().to_string(),
                phone_number: form.phone,
                date_of_birth: parsed.date_of_birth,
                faculty_id_number: parsed.faculty_id,
                department: parsed.department,
                designation: parsed.designation,
                years_experience: parsed.years_experience,
                registration_status: RegistrationStatus::Pending,
                is_active: false,
            })
            .await?;

        info!(
            account_id = account.id,
            username = %account.username,
            department = %account.department,
            "faculty account created, awaiting approval"
        );

        Ok(RegistrationReceipt {
            account_id: account.id,
            username: account.username,
            email: account.email,
        })
    }

    /// Move an account out of the pending state
    ///
    /// Valid only from `Pending` to `Approved` or `Rejected`; both
    /// targets are terminal. The approver identity and workflow live
    /// outside this service.
    pub async fn set_registration_status(
        &self,
        account_id: i64,
        status: RegistrationStatus,
    ) -> DomainResult<()> {
        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("account {account_id}"),
            })?;

        if status == RegistrationStatus::Pending
            || account.registration_status != RegistrationStatus::Pending
        {
            return Err(DomainError::InvalidStateTransition {
                from: account.registration_status,
                to: status,
            });
        }

        self.accounts
            .update_registration_status(account_id, status)
            .await
    }

    /// Check whether a username can still be registered
    ///
    /// Applies the same format rule as registration before consulting
    /// the store.
    pub async fn username_available(&self, username: &str) -> DomainResult<bool> {
        if !validation::is_valid_username(username) {
            return Err(RegistrationError::InvalidUsername.into());
        }
        Ok(!self.accounts.exists_by_username(username).await?)
    }

    /// Check whether an email can still be registered
    pub async fn email_available(&self, email: &str) -> DomainResult<bool> {
        if !validation::is_valid_email(email) {
            return Err(RegistrationError::InvalidEmail.into());
        }
        Ok(!self.accounts.exists_by_email(email).await?)
    }

    /// Ordered format validation; never touches storage
    fn validate(form: &RegistrationForm) -> Result<ParsedForm, RegistrationError> {
        if !validation::not_blank(&form.full_name) {
            return Err(RegistrationError::MissingFullName);
        }

        if !validation::not_blank(&form.email) {
            return Err(RegistrationError::MissingEmail);
        }
        if !validation::is_valid_email(&form.email) {
            return Err(RegistrationError::InvalidEmail);
        }

        if !validation::not_blank(&form.phone) {
            return Err(RegistrationError::MissingPhone);
        }
        if !validation::is_valid_phone(&form.phone) {
            return Err(RegistrationError::InvalidPhone);
        }

        let department =
            Department::from_str(&form.department).ok_or(RegistrationError::InvalidDepartment)?;
        let designation = Designation::from_str(&form.designation)
            .ok_or(RegistrationError::InvalidDesignation)?;

        let years_experience =
            u32::try_from(form.years_experience).map_err(|_| RegistrationError::InvalidExperience)?;

        if !validation::not_blank(&form.username) {
            return Err(RegistrationError::MissingUsername);
        }
        if !validation::is_valid_username(&form.username) {
            return Err(RegistrationError::InvalidUsername);
        }

        if form.password.is_empty() {
            return Err(RegistrationError::MissingPassword);
        }
        if form.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(RegistrationError::WeakPassword);
        }
        if form.confirm_password != form.password {
            return Err(RegistrationError::PasswordMismatch);
        }

        if !form.agree_to_terms {
            return Err(RegistrationError::TermsNotAccepted);
        }

        let date_of_birth = match form.date_of_birth.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| RegistrationError::InvalidDateOfBirth)?,
            ),
        };

        // An all-whitespace faculty ID means "not provided".
        let faculty_id = form
            .faculty_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(ParsedForm {
            department,
            designation,
            years_experience,
            date_of_birth,
            faculty_id,
        })
    }

    /// Run bcrypt hashing on the blocking thread pool
    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();

        let digest = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("password hashing task failed: {e}"),
            })??;
        Ok(digest)
    }
}
