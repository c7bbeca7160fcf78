// SPDX-License-Identifier: MPL-2.0
//! Client-side checks run before the sign-in form is submitted.

use crate::app::config::MIN_PASSWORD_LEN;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `local@domain.tld` where no part contains whitespace or `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Reason a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidEmail,
    PasswordTooShort { min: usize },
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::InvalidEmail => "notification-invalid-email",
            ValidationError::PasswordTooShort { .. } => "notification-password-too-short",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidEmail => write!(f, "invalid email address"),
            ValidationError::PasswordTooShort { min } => {
                write!(f, "password shorter than {} characters", min)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LEN
}

/// Checks the email first, then the password.
pub fn validate(email: &str, password: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_password(password) {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}
