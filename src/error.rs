//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror`. The `Display`
//! text of [`AddressBookError`] is exactly what the user sees after the
//! `Error: ` prefix, so every variant's message is written for the prompt.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record, directory and command operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A field failed validation (empty name, bad phone, bad date)
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The record already has a birthday
    #[error("Only one birthday is allowed per record ({0} already has one).")]
    BirthdayAlreadySet(String),

    /// No phone on the record matches
    #[error("Phone number {0} does not exist.")]
    PhoneNotFound(String),

    /// No record is filed under the name
    #[error("Contact {0} not found.")]
    ContactNotFound(String),

    /// The record has no birthday to show
    #[error("Birthday is not set for {0}.")]
    BirthdayNotSet(String),

    /// The record has no phones to show or change
    #[error("Contact {0} has no phone numbers.")]
    NoPhones(String),

    /// `change` needs exactly one phone, the record has several
    #[error("Multiple phone numbers found for {0}. Please specify which one to change.")]
    MultiplePhones(String),

    /// Wrong number of arguments for a command
    #[error("Invalid command. {0}")]
    InvalidArguments(String),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not a valid address book document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
