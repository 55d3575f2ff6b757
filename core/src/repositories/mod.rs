//! Repository interfaces abstracting the persistence layer.

pub mod account;
pub mod login_attempt;

pub use account::AccountRepository;
pub use login_attempt::LoginAttemptRepository;
