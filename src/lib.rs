//! Contact Book - an interactive command-line address book.
//!
//! Keeps named contacts with phone numbers and an optional birthday,
//! persists them to a JSON file, and answers simple queries: list all,
//! show a contact's phones, and birthdays coming up in the next days.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone number, birthday, name)
//! - **models**: Contact records and the address book that owns them
//! - **birthdays**: Upcoming birthday query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Loading and saving the address book
//! - **commands**: Parsing user input and running commands against a context
//! - **repl**: The interactive prompt loop

pub mod birthdays;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod repositories;

pub use birthdays::{upcoming_birthdays, UpcomingBirthday};
pub use commands::{execute, CommandContext, Outcome};
pub use config::Config;
pub use domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
pub use error::{AddressBookError, ConfigError, StorageError};
pub use models::{AddressBook, ContactRecord, UpsertOutcome};
pub use repl::SessionEnd;
pub use repositories::{AddressBookRepository, JsonFileRepository};
