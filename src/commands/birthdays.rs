//! Birthday commands.

use super::{render, usage};
use crate::directory::AddressBook;
use crate::error::{AddressBookError, CommandResult};
use chrono::NaiveDate;
use tracing::debug;

/// `add-birthday <name> <DD.MM.YYYY>`: set or replace a contact's birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> String {
    render(try_add_birthday(args, book))
}

fn try_add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, date] = args else {
        return Err(AddressBookError::Usage(usage::ADD_BIRTHDAY));
    };

    let Some(record) = book.find_mut(name) else {
        return Ok("Contact not found.".to_string());
    };

    record.set_birthday(date)?;
    debug!(name = %name, "Birthday added");
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: a contact's birthday as `DD.MM.YYYY`.
///
/// A missing contact and a contact without a birthday give the same answer.
pub fn show_birthday(args: &[String], book: &AddressBook) -> String {
    render(try_show_birthday(args, book))
}

fn try_show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(AddressBookError::Usage(usage::SHOW_BIRTHDAY));
    };

    Ok(book
        .find(name)
        .and_then(|record| record.birthday())
        .map_or_else(|| "Birthday not found.".to_string(), ToString::to_string))
}

/// `birthdays`: who to congratulate during the coming week.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    debug!(count = upcoming.len(), %today, "Computed upcoming birthdays");

    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
