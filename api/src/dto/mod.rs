//! Request and response data-transfer objects

pub mod auth;
pub mod faculty;
