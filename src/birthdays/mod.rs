//! Upcoming birthday query.
//!
//! Finds the contacts whose next birthday falls within a window of days
//! starting at a reference date. Each birthday is projected onto the
//! reference year, or onto the following year if it has already passed.
//! A 29 February birthday is celebrated on 28 February in non-leap years.

use crate::domain::{ContactName, BIRTHDAY_FORMAT};
use crate::models::AddressBook;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;

/// One contact's next birthday inside the query window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// The contact's name
    pub name: ContactName,

    /// Date the birthday falls on, within the window
    pub date: NaiveDate,

    /// Day of the week of `date`
    pub weekday: Weekday,
}

impl UpcomingBirthday {
    /// English name of the weekday, e.g. "Wednesday".
    pub fn weekday_name(&self) -> String {
        self.date.format("%A").to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.name,
            self.date.format(BIRTHDAY_FORMAT),
            self.date.format("%A")
        )
    }
}

/// Birthdays falling between `today` and `today + window_days`, both inclusive.
///
/// Results are sorted by date, then by name.
pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    window_days: u64,
) -> Vec<UpcomingBirthday> {
    let window_end = today
        .checked_add_days(Days::new(window_days))
        .unwrap_or(NaiveDate::MAX);

    let mut upcoming: Vec<UpcomingBirthday> = book
        .records()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let date = match birthday.occurrence_in(today.year())? {
                date if date < today => birthday.occurrence_in(today.year() + 1)?,
                date => date,
            };
            (date <= window_end).then(|| UpcomingBirthday {
                name: record.name().clone(),
                date,
                weekday: date.weekday(),
            })
        })
        .collect();

    upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
    upcoming
}
