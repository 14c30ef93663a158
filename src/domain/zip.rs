//! ZipCode value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static ZIP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5,6}$").expect("valid zip regex"));

/// A type-safe wrapper for zip codes.
///
/// A zip code is exactly 5 or 6 decimal digits. It is kept as a string
/// (never parsed to a number) so leading zeros survive and ordering is
/// lexicographic, matching how directories sort by zip.
///
/// # Example
///
/// ```
/// use address_book::domain::ZipCode;
///
/// let zip = ZipCode::new("62704").unwrap();
/// assert_eq!(zip.as_str(), "62704");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Create a new ZipCode, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidZip` unless the value is exactly
    /// 5 or 6 decimal digits.
    pub fn new(zip: impl Into<String>) -> Result<Self, ValidationError> {
        let zip = zip.into();

        if !ZIP_PATTERN.is_match(&zip) {
            return Err(ValidationError::InvalidZip(zip));
        }

        Ok(Self(zip))
    }

    /// Get the zip code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for ZipCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ZipCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ZipCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
