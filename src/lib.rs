//! Address Book - an in-memory contact directory with validated records.
//!
//! This library stores structured contact records, validates them at
//! construction time, and supports lookup, mutation, deletion, grouping,
//! counting, and sorting over an ordered in-memory collection. It is a
//! single-process library: no persistence, no network surface, no
//! concurrent access. Presentation of results is left to the caller,
//! which consumes [`Contact::describe`] and the `Directory` query results.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, addresses, zip, phone, email)
//! - **models**: the `Contact` record and `ContactUpdate` partial updates
//! - **directory**: the `Directory` collection and its operations
//! - **error**: custom error types for precise error handling
//!
//! # Example
//!
//! ```
//! use address_book::{Contact, Directory, LocationField};
//!
//! let mut directory = Directory::new();
//! directory.add(Contact::new(
//!     "Jasmine", "Bake", "123 Mango street", "Shimla",
//!     "Kashmir", "62704", "9876543210", "bake@example.com",
//! )?)?;
//! directory.add(Contact::new(
//!     "Sujal", "Rathore", "456 Town road", "Kolkata",
//!     "Bengal", "60616", "9876505678", "sujal@example.com",
//! )?)?;
//!
//! assert_eq!(directory.count(), 2);
//! assert_eq!(directory.find_by_location(LocationField::City, "shimla").len(), 1);
//! # Ok::<(), address_book::DirectoryError>(())
//! ```

pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use directory::{Directory, LocationField};
pub use domain::{
    City, EmailAddress, PersonName, PhoneNumber, State, StreetAddress, ValidationError, ZipCode,
};
pub use error::{DirectoryError, DirectoryResult};
pub use models::{Contact, ContactUpdate};
