//! Upcoming birthday computation.

use crate::domain::{BirthdayDate, ContactName, DATE_FORMAT};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;

/// Look-ahead window, in days, for upcoming birthdays.
pub const UPCOMING_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the look-ahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Who to congratulate
    pub name: ContactName,

    /// The day to congratulate them on, moved off weekends
    pub display_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.display_date.format(DATE_FORMAT))
    }
}

/// The next time `birthday` comes round, counting `today` itself.
pub(crate) fn next_occurrence(birthday: &BirthdayDate, today: NaiveDate) -> NaiveDate {
    let this_year = birthday.occurrence_in(today.year());
    if this_year < today {
        birthday.occurrence_in(today.year() + 1)
    } else {
        this_year
    }
}

/// Move a Saturday or Sunday forward to the following Monday.
pub(crate) fn shift_weekend(date: NaiveDate) -> NaiveDate {
    let days = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return date,
    };
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

/// Display date for `birthday` if it is at most `window_days` after `today`.
///
/// The window test uses the real occurrence; only the returned date is
/// shifted off the weekend, so it may land past the window.
pub(crate) fn upcoming_display_date(
    birthday: &BirthdayDate,
    today: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let occurrence = next_occurrence(birthday, today);
    let delta = (occurrence - today).num_days();
    if (0..=i64::from(window_days)).contains(&delta) {
        Some(shift_weekend(occurrence))
    } else {
        None
    }
}
