//! PersonName value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z]{2,}$").expect("valid name regex"));

/// A type-safe wrapper for proper names (first or last).
///
/// This ensures that names are validated at construction time: a name must
/// start with an uppercase letter followed by at least two more letters,
/// with no other characters.
///
/// # Example
///
/// ```
/// use address_book::domain::PersonName;
///
/// let name = PersonName::new("first name", "Jasmine").unwrap();
/// assert_eq!(name.as_str(), "Jasmine");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName, validating the format.
    ///
    /// `field` labels the name for error reporting (e.g. "first name"),
    /// since first and last names share the same rule.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name does not start
    /// with an uppercase letter followed by at least two more letters.
    pub fn new(field: &'static str, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !NAME_PATTERN.is_match(&name) {
            return Err(ValidationError::InvalidName { field, value: name });
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Case-insensitive comparison against a raw string.
    ///
    /// Names are validated to contain only ASCII letters, so ASCII case
    /// folding is exact here.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

// Serde support - serialize as string
impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PersonName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PersonName::new("name", s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
