//! Profile form values and input constraints.
//!
//! # Invariants
//! - A form that passes `check_validity` always yields a record with
//!   non-empty name, well-shaped email and a supported role.
//! - Name and email are trimmed before they are stored; role is kept as entered.

use crate::model::state::ProfileRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Roles offered by the profile form.
pub const PROFILE_ROLES: &[&str] = &["student", "lawyer", "entrepreneur", "other"];

/// Form control identity, used when preloading saved values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Role,
}

/// Raw values currently held by the profile form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// First failed constraint of a profile form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    MissingName,
    MissingEmail,
    InvalidEmail(String),
    MissingRole,
    UnsupportedRole(String),
}

impl Display for ProfileValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "name is required"),
            Self::MissingEmail => write!(f, "email is required"),
            Self::InvalidEmail(value) => write!(f, "email `{value}` is not a valid address"),
            Self::MissingRole => write!(f, "role is required"),
            Self::UnsupportedRole(value) => write!(
                f,
                "role `{value}` is not supported; expected one of {}",
                PROFILE_ROLES.join("|")
            ),
        }
    }
}

impl Error for ProfileValidationError {}

impl ProfileValidationError {
    /// Stable code for logs; carries no user-entered text.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingName => "missing_name",
            Self::MissingEmail => "missing_email",
            Self::InvalidEmail(_) => "invalid_email",
            Self::MissingRole => "missing_role",
            Self::UnsupportedRole(_) => "unsupported_role",
        }
    }
}

impl ProfileForm {
    /// Returns the raw value of one control.
    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Role => &self.role,
        }
    }

    /// Returns the email control value with surrounding whitespace removed.
    pub fn trimmed_email(&self) -> &str {
        self.email.trim()
    }

    /// Checks every constraint and builds the record to persist.
    pub fn check_validity(&self) -> Result<ProfileRecord, ProfileValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProfileValidationError::MissingName);
        }

        let email = self.trimmed_email();
        if email.is_empty() {
            return Err(ProfileValidationError::MissingEmail);
        }
        if !EMAIL_RE.is_match(email) {
            return Err(ProfileValidationError::InvalidEmail(email.to_string()));
        }

        if self.role.is_empty() {
            return Err(ProfileValidationError::MissingRole);
        }
        if !PROFILE_ROLES.iter().any(|role| *role == self.role) {
            return Err(ProfileValidationError::UnsupportedRole(self.role.clone()));
        }

        Ok(ProfileRecord {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            role: Some(self.role.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ProfileField, ProfileForm, ProfileValidationError};

    fn form(name: &str, email: &str, role: &str) -> ProfileForm {
        ProfileForm {
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn valid_form_trims_name_and_email() {
        let record = form("  Ann ", " ann@example.com ", "lawyer")
            .check_validity()
            .unwrap();
        assert_eq!(record.name.as_deref(), Some("Ann"));
        assert_eq!(record.email.as_deref(), Some("ann@example.com"));
        assert_eq!(record.role.as_deref(), Some("lawyer"));
    }

    #[test]
    fn constraints_report_first_failure() {
        assert_eq!(
            form(" ", "", "").check_validity(),
            Err(ProfileValidationError::MissingName)
        );
        assert_eq!(
            form("Ann", "  ", "student").check_validity(),
            Err(ProfileValidationError::MissingEmail)
        );
        assert_eq!(
            form("Ann", "ann-at-example", "student").check_validity(),
            Err(ProfileValidationError::InvalidEmail("ann-at-example".to_string()))
        );
        assert_eq!(
            form("Ann", "ann@example.com", "").check_validity(),
            Err(ProfileValidationError::MissingRole)
        );
        assert_eq!(
            form("Ann", "ann@example.com", "judge").check_validity(),
            Err(ProfileValidationError::UnsupportedRole("judge".to_string()))
        );
    }

    #[test]
    fn value_reads_raw_control_text() {
        let form = form("Ann", " a@b.co ", "other");
        assert_eq!(form.value(ProfileField::Email), " a@b.co ");
        assert_eq!(form.trimmed_email(), "a@b.co");
    }
}
