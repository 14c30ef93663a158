//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant identifies the rule that failed and carries the offending
/// value so callers can report the failure without further lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A name field does not start with an uppercase letter followed by
    /// at least two more letters.
    InvalidName {
        /// Which name field failed (e.g. "first name").
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A free-text field (address, city, state) is shorter than the
    /// minimum of 4 characters.
    FieldTooShort {
        /// Which field failed.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The provided zip code is not 5 or 6 decimal digits.
    InvalidZip(String),

    /// The provided phone number is not exactly 10 decimal digits.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { field, value } => write!(
                f,
                "Invalid {field} '{value}': must start with an uppercase letter \
                 followed by at least two more letters"
            ),
            Self::FieldTooShort { field, value } => {
                write!(f, "Invalid {field} '{value}': must be at least 4 characters")
            }
            Self::InvalidZip(zip) => {
                write!(f, "Invalid zip code '{zip}': must be 5 or 6 digits")
            }
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number '{phone}': must be exactly 10 digits")
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {email}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::InvalidName {
            field: "first name",
            value: "Jo".to_string(),
        };
        assert!(err.to_string().contains("first name"));
        assert!(err.to_string().contains("Jo"));

        let err = ValidationError::InvalidZip("123".to_string());
        assert_eq!(err.to_string(), "Invalid zip code '123': must be 5 or 6 digits");

        let err = ValidationError::InvalidEmail("nope".to_string());
        assert_eq!(err.to_string(), "Invalid email address: nope");
    }
}
