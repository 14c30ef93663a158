//! Free-text location value objects: street address, city and state.
//!
//! All three share the same rule (at least 4 characters) but are distinct
//! types so a city can never be passed where a street address is expected.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const MIN_LEN: usize = 4;

fn check_len(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.chars().count() < MIN_LEN {
        return Err(ValidationError::FieldTooShort { field, value });
    }
    Ok(value)
}

macro_rules! location_field {
    ($(#[$doc:meta])* $name:ident, $label:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Create a new value, validating the minimum length of 4 characters.
            ///
            /// # Errors
            ///
            /// Returns `ValidationError::FieldTooShort` if the value is too short.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                check_len($label, value.into()).map(Self)
            }

            /// Get the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the underlying String.
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Case-insensitive comparison against a raw string.
            pub fn matches(&self, other: &str) -> bool {
                self.0.to_lowercase() == other.to_lowercase()
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $name::new(s).map_err(serde::de::Error::custom)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

location_field!(
    /// A street address, e.g. "123 Mango street".
    StreetAddress,
    "address"
);

location_field!(
    /// A city name.
    City,
    "city"
);

location_field!(
    /// A state or region name.
    State,
    "state"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_length_enforced() {
        assert!(StreetAddress::new("123").is_err());
        assert!(City::new("Ely").is_err());
        assert!(State::new("WB").is_err());
        assert!(StreetAddress::new("123 Mango street").is_ok());
        assert!(City::new("Shimla").is_ok());
        assert!(State::new("Kashmir").is_ok());
    }

    #[test]
    fn test_error_names_the_field() {
        let err = City::new("x").unwrap_err();
        assert_eq!(
            err,
            ValidationError::FieldTooShort {
                field: "city",
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn test_matches_case_insensitive() {
        let city = City::new("Shimla").unwrap();
        assert!(city.matches("shimla"));
        assert!(city.matches("SHIMLA"));
        assert!(!city.matches("Kolkata"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let state = State::new("Kashmir").unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"Kashmir\"");
        let back: State = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_deserialization_invalid_fails() {
        let result: Result<City, _> = serde_json::from_str("\"ab\"");
        assert!(result.is_err());
    }
}
