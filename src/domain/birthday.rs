//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual form used for both input and display.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A birthday, stored as a calendar date.
///
/// Parsed from `DD.MM.YYYY` (day and month may omit the leading zero, the
/// year is always four digits) and always rendered zero-padded.
///
/// # Example
///
/// ```
/// use contact_book::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::parse("29.02.2024").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2024");
/// assert!(BirthdayDate::parse("29.02.2023").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a `DD.MM.YYYY` string into a real calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` for wrong separators, non-numeric
    /// parts, out-of-range day or month, and dates that do not exist.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDate(input.to_string());

        let mut parts = input.split('.');
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let day = Self::numeric_part(day, 1..=2).ok_or_else(invalid)?;
        let month = Self::numeric_part(month, 1..=2).ok_or_else(invalid)?;
        let year = Self::numeric_part(year, 4..=4).ok_or_else(invalid)?;

        let year = i32::try_from(year).map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Parse an all-digit part whose length is within `len`.
    fn numeric_part(part: &str, len: std::ops::RangeInclusive<usize>) -> Option<u32> {
        if !len.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    /// Returns `None` only when `year` is outside the supported calendar.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).or_else(|| {
            if self.0.month() == 2 && self.0.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl From<NaiveDate> for BirthdayDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
