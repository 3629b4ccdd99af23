//! State shared by every command handler.

use crate::config::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use crate::models::AddressBook;
use chrono::{Local, NaiveDate};

/// Everything a command can read or change.
///
/// Owns the address book for the lifetime of a session; handlers receive
/// it explicitly instead of reaching for global state.
#[derive(Debug, Clone)]
pub struct CommandContext {
    book: AddressBook,
    birthday_window_days: u64,
    today: Option<NaiveDate>,
}

impl CommandContext {
    pub fn new(book: AddressBook, birthday_window_days: u64) -> Self {
        Self {
            book,
            birthday_window_days,
            today: None,
        }
    }

    /// Pin "today" to a fixed date instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.book
    }

    pub fn address_book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    pub fn birthday_window_days(&self) -> u64 {
        self.birthday_window_days
    }

    /// The pinned date, or the local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new(AddressBook::new(), DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }
}
