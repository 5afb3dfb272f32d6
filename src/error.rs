//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror`. Every variant's
//! `Display` is the exact message the user sees after the `Error: ` prefix.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record, address book and command operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A phone number, date or name failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is not stored on the record
    #[error("Phone number {0} not found.")]
    PhoneNotFound(String),

    /// No contact with this name exists
    #[error("Contact not found.")]
    ContactNotFound(String),

    /// Wrong number of arguments for a command
    #[error("Usage -> {0}")]
    Usage(&'static str),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results of record and command operations
pub type CommandResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
