//! Data models for the address book.
//!
//! A [`ContactRecord`] holds one person's phones and birthday; an
//! [`AddressBook`] owns every record, filed by name.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpsertOutcome};
pub use record::ContactRecord;
