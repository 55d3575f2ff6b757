//! Shared utilities and common types for the SeminarBook server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response structures
//! - Input-format validators (email, phone, username)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use types::{ApiResponse, ErrorResponse};
pub use utils::validation;
