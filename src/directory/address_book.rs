//! AddressBook: the keyed, insertion-ordered collection of records.

use super::upcoming::{upcoming_display_date, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
use crate::domain::ContactName;
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// All contacts of the session, keyed by name.
///
/// Records are kept in insertion order so listings are deterministic; the
/// name index maps each key to its slot in that order. Overwriting an
/// existing name keeps the original slot.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<ContactName, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        match self.index.get(record.name()) {
            Some(&slot) => {
                debug!(name = %record.name(), "Replacing existing record");
                self.records[slot] = record;
            }
            None => {
                debug!(name = %record.name(), "Adding new record");
                self.index.insert(record.name().clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    /// Exact-match lookup by name, for in-place edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let slot = *self.index.get(name)?;
        self.records.get_mut(slot)
    }

    /// Remove the record called `name`, if there is one.
    ///
    /// Deleting a missing name is a no-op and returns `None`.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let slot = self.index.remove(name)?;
        let removed = self.records.remove(slot);
        for later in self.index.values_mut().filter(|s| **s > slot) {
            *later -= 1;
        }
        debug!(name = %removed.name(), "Deleted record");
        Some(removed)
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Contacts whose next birthday is between 0 and [`UPCOMING_WINDOW_DAYS`]
    /// days after `today`, in insertion order.
    ///
    /// Birthdays on a Saturday or Sunday are reported on the following Monday.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let display_date =
                    upcoming_display_date(birthday, today, UPCOMING_WINDOW_DAYS)?;
                Some(UpcomingBirthday {
                    name: record.name().clone(),
                    display_date,
                })
            })
            .collect()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "AddressBook: <empty>");
        }
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
        let mut record = Record::new(ContactName::new(name).unwrap());
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        if let Some(birthday) = birthday {
            record.set_birthday(birthday).unwrap();
        }
        record
    }

    fn names(book: &AddressBook) -> Vec<&str> {
        book.iter().map(|r| r.name().as_str()).collect()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(record("Jane", &["1234567890"], None));

        let found = book.find("Jane").unwrap();
        assert_eq!(found.phones()[0].as_str(), "1234567890");
        assert!(book.find("jane").is_none());
        assert!(book.find("Bob").is_none());
    }

    #[test]
    fn test_add_record_last_write_wins_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Jane", &["1111111111"], None));
        book.add_record(record("Bob", &[], None));
        book.add_record(record("Jane", &["2222222222"], None));

        assert_eq!(book.len(), 2);
        assert_eq!(names(&book), vec!["Jane", "Bob"]);
        assert_eq!(book.find("Jane").unwrap().phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Jane", &[], None));
        book.find_mut("Jane").unwrap().add_phone("1234567890").unwrap();
        assert_eq!(book.find("Jane").unwrap().phones().len(), 1);
        assert!(book.find_mut("Bob").is_none());
    }

    #[test]
    fn test_delete_reindexes_later_records() {
        let mut book = AddressBook::new();
        for name in ["A", "B", "C", "D"] {
            book.add_record(record(name, &[], None));
        }

        let removed = book.delete("B").unwrap();
        assert_eq!(removed.name().as_str(), "B");
        assert_eq!(names(&book), vec!["A", "C", "D"]);
        assert_eq!(book.find("C").unwrap().name().as_str(), "C");
        assert_eq!(book.find("D").unwrap().name().as_str(), "D");

        book.add_record(record("B", &[], None));
        assert_eq!(names(&book), vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut book = AddressBook::new();
        book.add_record(record("Jane", &["1234567890"], None));
        let before = book.to_string();

        assert!(book.delete("Bob").is_none());
        assert_eq!(book.len(), 1);
        assert_eq!(book.to_string(), before);
    }

    #[test]
    fn test_display() {
        let mut book = AddressBook::new();
        assert_eq!(book.to_string(), "AddressBook: <empty>");
        assert!(book.is_empty());

        book.add_record(record("Jane", &["1234567890"], Some("03.01.1990")));
        book.add_record(record("Bob", &[], None));
        assert_eq!(
            book.to_string(),
            "Contact name: Jane, phones: 1234567890, birthday: 03.01.1990\n\
             Contact name: Bob, phones: , birthday: N/A"
        );
    }

    #[test]
    fn test_upcoming_birthdays_keeps_insertion_order() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut book = AddressBook::new();
        book.add_record(record("Late", &[], Some("07.01.1980")));
        book.add_record(record("NoBirthday", &[], None));
        book.add_record(record("Far", &[], Some("20.01.1980")));
        book.add_record(record("Early", &[], Some("02.01.1980")));

        let upcoming: Vec<String> = book
            .upcoming_birthdays(today)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(upcoming, vec!["Late: 07.01.2025", "Early: 02.01.2025"]);
    }
}
