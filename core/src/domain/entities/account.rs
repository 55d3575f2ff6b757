//! Account entity representing a faculty member registered with the booking system.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum accepted password length at registration time
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Academic department a faculty account belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Department {
    Bca,
    Bba,
    Bcom,
}

impl Department {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bca => "BCA",
            Self::Bba => "BBA",
            Self::Bcom => "BCOM",
        }
    }

    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "BCA" => Some(Self::Bca),
            "BBA" => Some(Self::Bba),
            "BCOM" => Some(Self::Bcom),
            _ => None,
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Teaching designation of a faculty member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Designation {
    Professor,
    AssociateProfessor,
    AssistantProfessor,
    Lecturer,
    VisitingFaculty,
    GuestLecturer,
}

impl Designation {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professor => "professor",
            Self::AssociateProfessor => "associate_professor",
            Self::AssistantProfessor => "assistant_professor",
            Self::Lecturer => "lecturer",
            Self::VisitingFaculty => "visiting_faculty",
            Self::GuestLecturer => "guest_lecturer",
        }
    }

    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "professor" => Some(Self::Professor),
            "associate_professor" => Some(Self::AssociateProfessor),
            "assistant_professor" => Some(Self::AssistantProfessor),
            "lecturer" => Some(Self::Lecturer),
            "visiting_faculty" => Some(Self::VisitingFaculty),
            "guest_lecturer" => Some(Self::GuestLecturer),
            _ => None,
        }
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Administrative review state of a registration
///
/// Accounts start out `Pending` and leave that state only through an
/// administrative decision. `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
}

impl RegistrationStatus {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Whether the status can no longer change
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted faculty account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, assigned by the credential store on insert
    pub id: i64,

    /// Login name, unique and case-sensitive
    pub username: String,

    /// One-way digest of the password; the plaintext is never stored
    #[serde(skip_serializing)]
    pub password_digest: String,

    /// Contact email, unique case-insensitively
    pub email: String,

    /// Display name of the faculty member
    pub full_name: String,

    /// 10-digit mobile number
    pub phone_number: String,

    /// Date of birth, if supplied at registration
    pub date_of_birth: Option<NaiveDate>,

    /// College-issued faculty identifier, unique when present
    pub faculty_id_number: Option<String>,

    /// Academic department
    pub department: Department,

    /// Teaching designation
    pub designation: Designation,

    /// Years of teaching experience
    pub years_experience: u32,

    /// Administrative review state
    pub registration_status: RegistrationStatus,

    /// Whether the account may authenticate
    pub is_active: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last successful login
    pub last_login: Option<DateTime<Utc>>,
}

impl Account {
    /// An account authenticates only once it has been approved and activated.
    pub fn can_authenticate(&self) -> bool {
        self.is_active && self.registration_status == RegistrationStatus::Approved
    }

    /// Record a successful login
    pub fn record_login(&mut self, at: DateTime<Utc>) {
        self.last_login = Some(at);
    }
}

/// The insertable shape of an account, before the store assigns an id
///
/// `registration_status` and `is_active` are carried explicitly so the
/// store never guesses; `pending()` builds the only state registration
/// is allowed to create.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub username: String,
    pub password_digest: String,
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub faculty_id_number: Option<String>,
    pub department: Department,
    pub designation: Designation,
    pub years_experience: u32,
    pub registration_status: RegistrationStatus,
    pub is_active: bool,
}
