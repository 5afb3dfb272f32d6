//! Record model representing one contact in the address book.

use crate::domain::{BirthdayDate, ContactName, PhoneNumber};
use crate::error::{AddressBookError, CommandResult};
use std::fmt;

/// A single contact: a name, any number of phones and an optional birthday.
///
/// The name is fixed at creation. Phones keep insertion order and are not
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<BirthdayDate>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: ContactName) -> Self {
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

    /// Validate `raw` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `raw` is not ten digits.
    pub fn add_phone(&mut self, raw: &str) -> CommandResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `raw`.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, raw: &str) -> CommandResult<PhoneNumber> {
        let index = self
            .position_of(raw)
            .ok_or_else(|| AddressBookError::PhoneNotFound(raw.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Replace `old` with `new`, moving the entry to the end of the list.
    ///
    /// See [`Record::change_phone`] for the in-place variant.
    ///
    /// # Errors
    ///
    /// Returns `PhoneNotFound` if `old` is absent, or a validation error if
    /// `new` is not ten digits. The list is untouched on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| AddressBookError::PhoneNotFound(old.to_string()))?;
        let replacement = PhoneNumber::new(new)?;
        self.phones.remove(index);
        self.phones.push(replacement);
        Ok(())
    }

    /// Replace the first `old` with `new` at the same position.
    ///
    /// Returns `Ok(false)` when `old` is not on the record. `new` is only
    /// validated once `old` has been found.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `new` is not ten digits.
    pub fn change_phone(&mut self, old: &str, new: &str) -> CommandResult<bool> {
        let Some(index) = self.position_of(old) else {
            return Ok(false);
        };
        self.phones[index] = PhoneNumber::new(new)?;
        Ok(true)
    }

    /// First phone exactly equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Validate and store a `DD.MM.YYYY` birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed or impossible date.
    pub fn set_birthday(&mut self, raw: &str) -> CommandResult<()> {
        self.birthday = Some(BirthdayDate::parse(raw)?);
        Ok(())
    }

    /// Single-line text form used by the `all` command.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "N/A"),
        }
    }
}
