//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact: its name, its phone
//! numbers and its birthday. Each one validates at construction time, so an
//! invalid value can never be stored in a record or read back from disk.

pub mod birthday;
pub mod contact_name;
pub mod errors;
pub mod phone;

pub use birthday::{BirthdayDate, BIRTHDAY_FORMAT};
pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
