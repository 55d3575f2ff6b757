//! # SeminarBook Infrastructure
//!
//! MySQL-backed implementations of the repository interfaces defined in
//! `sb_core`, plus connection-pool management and schema migrations.

pub mod database;

// Re-export commonly used types
pub use database::{DatabasePool, MySqlAccountRepository, MySqlLoginAttemptRepository};
