//! MySQL repository implementations

mod account_repository_impl;
mod login_attempt_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use login_attempt_repository_impl::MySqlLoginAttemptRepository;
