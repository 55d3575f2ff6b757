//! Type definitions module
//!
//! - `response` - API response wrappers and error envelopes

pub mod response;

// Re-export commonly used types at module level
pub use response::{ApiResponse, ErrorResponse};
