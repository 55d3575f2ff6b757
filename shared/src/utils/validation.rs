//! Input-format validators shared by the registration and login flows
//!
//! The patterns match what the faculty-facing forms accept: a standard
//! email shape, Indian 10-digit mobile numbers (leading digit 6-9), and
//! usernames of 4-20 characters drawn from letters, digits, dot,
//! underscore and hyphen.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").expect("valid phone regex"));

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._-]{4,20}$").expect("valid username regex"));

/// Check if a string is non-empty after trimming
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if an email address is well-formed
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check if a phone number is a valid 10-digit mobile number
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Check if a username matches the allowed format
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_PATTERN.is_match(username)
}
