//! Contact record: one person in the address book.

use crate::domain::{BirthdayDate, ContactName, PhoneNumber};
use crate::error::{AddressBookError, AddressBookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A person with an ordered list of phone numbers and an optional birthday.
///
/// Phones keep insertion order and may contain the same number twice.
/// A birthday can be set once and never overwritten.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> AddressBookResult<Self> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> AddressBookResult<()> {
        let phone = PhoneNumber::new(phone)?;
        debug!(contact = %self.name, %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Append a phone number that has already been validated.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove every phone equal to `phone`. Absent numbers are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        debug!(
            contact = %self.name,
            phone,
            removed = before - self.phones.len(),
            "Removed phone"
        );
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// `PhoneNotFound` if no phone equals `old`, checked before `new` is
    /// validated; `InvalidPhone` if `new` is not ten digits.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> AddressBookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| AddressBookError::PhoneNotFound(old.to_string()))?;

        let new = PhoneNumber::new(new)?;
        debug!(contact = %self.name, old, %new, "Editing phone");
        self.phones[index] = new;
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Parse and set the birthday.
    ///
    /// # Errors
    ///
    /// `BirthdayAlreadySet` if one is already stored (the stored date is kept),
    /// otherwise `InvalidDate` when the input does not parse.
    pub fn add_birthday(&mut self, birthday: &str) -> AddressBookResult<()> {
        if self.birthday.is_some() {
            return Err(AddressBookError::BirthdayAlreadySet(
                self.name.to_string(),
            ));
        }

        let birthday = BirthdayDate::parse(birthday)?;
        debug!(contact = %self.name, %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
