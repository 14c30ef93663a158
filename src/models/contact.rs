//! Contact model: one person's validated contact record.

use crate::domain::{
    City, EmailAddress, PersonName, PhoneNumber, State, StreetAddress, ValidationError, ZipCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// Every field is a validated value object, so a live `Contact` always
/// satisfies the field rules; invalid input can never produce an instance.
/// Construction evaluates the rules in a fixed order (names, then address
/// fields, then zip, phone, email) and reports the first failure.
///
/// # Example
///
/// ```
/// use address_book::Contact;
///
/// let contact = Contact::new(
///     "Jasmine",
///     "Bake",
///     "123 Mango street",
///     "Shimla",
///     "Kashmir",
///     "62704",
///     "9876543210",
///     "bake@example.com",
/// )
/// .unwrap();
/// assert_eq!(contact.full_name(), "Jasmine Bake");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// First name
    pub first_name: PersonName,

    /// Last name
    pub last_name: PersonName,

    /// Street address
    pub address: StreetAddress,

    /// City
    pub city: City,

    /// State or region
    pub state: State,

    /// Zip code (5 or 6 digits, kept as a string)
    pub zip: ZipCode,

    /// Phone number (10 digits)
    pub phone: PhoneNumber,

    /// Email address
    pub email: EmailAddress,

    /// When the contact was created (UTC)
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// When the contact was last updated (UTC)
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Create a new contact, validating every field.
    ///
    /// Rules are checked in order: first name, last name, address, city,
    /// state, zip, phone, email. The first failing rule is reported and
    /// no instance is produced.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` for the first field that fails.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: &str,
        last_name: &str,
        address: &str,
        city: &str,
        state: &str,
        zip: &str,
        phone: &str,
        email: &str,
    ) -> Result<Self, ValidationError> {
        let first_name = PersonName::new("first name", first_name)?;
        let last_name = PersonName::new("last name", last_name)?;
        let address = StreetAddress::new(address)?;
        let city = City::new(city)?;
        let state = State::new(state)?;
        let zip = ZipCode::new(zip)?;
        let phone = PhoneNumber::new(phone)?;
        let email = EmailAddress::new(email)?;

        let now = Utc::now();
        Ok(Self {
            first_name,
            last_name,
            address,
            city,
            state,
            zip,
            phone,
            email,
            created_at: now,
            updated_at: now,
        })
    }

    /// The "First Last" display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive match on the (first name, last name) natural key.
    pub fn matches_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name.matches(first_name) && self.last_name.matches(last_name)
    }

    /// Render the contact as a single line, fields in canonical order:
    /// first name, last name, address, city, state, zip, phone, email.
    pub fn describe(&self) -> String {
        format!(
            "{} {}, {}, {}, {} - {}, Phone: {}, Email: {}",
            self.first_name,
            self.last_name,
            self.address,
            self.city,
            self.state,
            self.zip,
            self.phone,
            self.email
        )
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Partial field updates for an existing contact.
///
/// Fields left as `None` keep their current value. Applying an update
/// re-validates every resulting field with the same rules as construction,
/// so an edit can never leave an invalid record behind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactUpdate {
    /// True when no field is set; applying such an update only refreshes
    /// the `updated_at` timestamp.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip.is_none()
            && self.phone.is_none()
            && self.email.is_none()
    }

    /// Merge this update onto `existing`, producing a fully re-validated
    /// contact. `existing` is untouched; on error nothing is produced.
    ///
    /// The result keeps the original `created_at` and carries a fresh
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` for the first merged field that fails.
    pub fn apply_to(&self, existing: &Contact) -> Result<Contact, ValidationError> {
        let mut updated = Contact::new(
            self.first_name.as_deref().unwrap_or(existing.first_name.as_str()),
            self.last_name.as_deref().unwrap_or(existing.last_name.as_str()),
            self.address.as_deref().unwrap_or(existing.address.as_str()),
            self.city.as_deref().unwrap_or(existing.city.as_str()),
            self.state.as_deref().unwrap_or(existing.state.as_str()),
            self.zip.as_deref().unwrap_or(existing.zip.as_str()),
            self.phone.as_deref().unwrap_or(existing.phone.as_str()),
            self.email.as_deref().unwrap_or(existing.email.as_str()),
        )?;
        updated.created_at = existing.created_at;
        Ok(updated)
    }
}
