//! The address book: every contact record, keyed by name.

use super::record::ContactRecord;
use crate::domain::{ContactName, PhoneNumber};
use crate::error::AddressBookResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Which branch of [`AddressBook::upsert_phone`] was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new record was created for the name
    Added,
    /// The phone was appended to the existing record
    Updated,
}

/// All contact records, at most one per name.
///
/// Names are matched exactly (case-sensitive). Iteration is ordered by name;
/// callers should not rely on any particular order.
///
/// Persists as a JSON array of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ContactRecord>", into = "Vec<ContactRecord>")]
pub struct AddressBook {
    records: BTreeMap<ContactName, ContactRecord>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing and returning any record
    /// already filed under that name.
    pub fn add_record(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        debug!(contact = %record.name(), "Adding record");
        self.records.insert(record.name().clone(), record)
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record filed under `name`. Absent names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            debug!(contact = name, "Deleted record");
        }
        removed
    }

    /// Add `phone` to the contact called `name`, creating the contact if needed.
    ///
    /// The phone is validated first, so on error the book is unchanged.
    /// Existing phones are never replaced.
    pub fn upsert_phone(&mut self, name: &str, phone: &str) -> AddressBookResult<UpsertOutcome> {
        let name = ContactName::new(name)?;
        let phone = PhoneNumber::new(phone)?;

        if let Some(record) = self.records.get_mut(name.as_str()) {
            debug!(contact = %name, %phone, "Appending phone to existing record");
            record.push_phone(phone);
            return Ok(UpsertOutcome::Updated);
        }

        let mut record = ContactRecord::with_name(name);
        record.push_phone(phone);
        self.add_record(record);
        Ok(UpsertOutcome::Added)
    }

    /// All records, ordered by name.
    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Later duplicates replace earlier ones, as add_record does.
impl From<Vec<ContactRecord>> for AddressBook {
    fn from(records: Vec<ContactRecord>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<ContactRecord> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}

impl FromIterator<ContactRecord> for AddressBook {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}
