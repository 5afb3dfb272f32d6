//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// `chrono` format string for the `DD.MM.YYYY` display form.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Two-digit day, two-digit month, four-digit year, ASCII digits only.
static DATE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{4})$").expect("Failed to compile date regex")
});

/// A validated birthday.
///
/// Only the strict `DD.MM.YYYY` form is accepted: `1.1.1990`, `01-01-1990`
/// and `31.04.1990` are all rejected. Years are not range-checked, so a date
/// in the future is a valid birthday.
///
/// # Example
///
/// ```
/// use address_book::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::parse("03.01.1990").unwrap();
/// assert_eq!(birthday.to_string(), "03.01.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the string has any
    /// other shape or names a day that does not exist in the calendar.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDateFormat(raw.to_string());

        let caps = DATE_SHAPE_REGEX.captures(raw).ok_or_else(invalid)?;
        let day: u32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let year: i32 = caps[3].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's month and day in the given year.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
