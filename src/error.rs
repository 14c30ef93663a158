//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on a [`Directory`](crate::Directory).
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// A contact with the same (first name, last name) pair already exists
    #[error("Duplicate contact: an entry for {first_name} {last_name} already exists")]
    Duplicate {
        first_name: String,
        last_name: String,
    },

    /// No contact matched the given name pair
    #[error("Contact not found: {first_name} {last_name}")]
    NotFound {
        first_name: String,
        last_name: String,
    },

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;
