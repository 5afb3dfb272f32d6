//! Contact and phone commands.

use super::{render, usage};
use crate::directory::AddressBook;
use crate::domain::{ContactName, PhoneNumber};
use crate::error::{AddressBookError, CommandResult};
use crate::models::Record;
use tracing::{debug, info};

/// `add <name> <phone>`: create the contact if needed, then add the phone.
///
/// The contact is created before the phone is validated, so an invalid
/// phone for a new name still leaves a phone-less contact behind.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> String {
    render(try_add_contact(args, book))
}

fn try_add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(AddressBookError::Usage(usage::ADD));
    };

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(ContactName::new(name.as_str())?));
        info!(name = %name, "Contact added");
        "Contact added."
    };

    if !phone.is_empty() {
        if let Some(record) = book.find_mut(name) {
            record.add_phone(phone)?;
        }
    }

    Ok(message.to_string())
}

/// `change <name> <old> <new>`: replace a phone in place.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> String {
    render(try_change_contact(args, book))
}

fn try_change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old, new] = args else {
        return Err(AddressBookError::Usage(usage::CHANGE));
    };

    let changed = match book.find_mut(name) {
        Some(record) => record.change_phone(old, new)?,
        None => false,
    };

    if changed {
        debug!(name = %name, "Phone number updated");
        Ok("Phone number updated.".to_string())
    } else {
        Ok("Contact or phone not found.".to_string())
    }
}

/// `phone <name>`: list a contact's phones, comma separated.
pub fn show_phones(args: &[String], book: &AddressBook) -> String {
    render(try_show_phones(args, book))
}

fn try_show_phones(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(AddressBookError::Usage(usage::PHONE));
    };

    let Some(record) = book.find(name) else {
        return Ok("Contact not found.".to_string());
    };

    if record.phones().is_empty() {
        return Ok("No phones saved.".to_string());
    }

    Ok(record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", "))
}

/// `all`: every contact, one per line.
pub fn show_all(book: &AddressBook) -> String {
    book.to_string()
}

/// `delete <name>`: remove a contact.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> String {
    render(try_delete_contact(args, book))
}

fn try_delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(AddressBookError::Usage(usage::DELETE));
    };

    match book.delete(name) {
        Some(_) => {
            info!(name = %name, "Contact deleted");
            Ok("Contact deleted.".to_string())
        }
        None => Err(AddressBookError::ContactNotFound(name.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_add_contact_then_update() {
        let mut book = AddressBook::new();
        assert_eq!(add_contact(&args(&["Jane", "1234567890"]), &mut book), "Contact added.");
        assert_eq!(
            add_contact(&args(&["Jane", "0987654321"]), &mut book),
            "Contact updated."
        );
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Jane").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_invalid_phone_keeps_new_contact() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_contact(&args(&["Jane", "123"]), &mut book),
            "Error: Phone number must contain exactly 10 digits."
        );
        let record = book.find("Jane").unwrap();
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_add_contact_empty_phone_is_skipped() {
        let mut book = AddressBook::new();
        assert_eq!(add_contact(&args(&["Jane", ""]), &mut book), "Contact added.");
        assert!(book.find("Jane").unwrap().phones().is_empty());
    }

    #[test]
    fn test_add_contact_empty_name() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_contact(&args(&["", "1234567890"]), &mut book),
            "Error: Contact name cannot be empty"
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_contact_usage() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_contact(&args(&["Jane"]), &mut book),
            "Error: Usage -> add <name> <phone>"
        );
    }

    #[test]
    fn test_change_contact() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Jane", "1111111111"]), &mut book);
        add_contact(&args(&["Jane", "2222222222"]), &mut book);

        assert_eq!(
            change_contact(&args(&["Jane", "1111111111", "3333333333"]), &mut book),
            "Phone number updated."
        );
        assert_eq!(show_phones(&args(&["Jane"]), &book), "3333333333, 2222222222");
    }

    #[test]
    fn test_change_contact_not_found_is_uniform() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Jane", "1111111111"]), &mut book);

        let missing_phone =
            change_contact(&args(&["Jane", "9999999999", "3333333333"]), &mut book);
        let missing_contact =
            change_contact(&args(&["Bob", "1111111111", "3333333333"]), &mut book);
        assert_eq!(missing_phone, "Contact or phone not found.");
        assert_eq!(missing_contact, missing_phone);
    }

    #[test]
    fn test_change_contact_invalid_new_phone() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Jane", "1111111111"]), &mut book);
        assert_eq!(
            change_contact(&args(&["Jane", "1111111111", "bad"]), &mut book),
            "Error: Phone number must contain exactly 10 digits."
        );
        assert_eq!(show_phones(&args(&["Jane"]), &book), "1111111111");
    }

    #[test]
    fn test_show_phones() {
        let mut book = AddressBook::new();
        assert_eq!(show_phones(&args(&["Jane"]), &book), "Contact not found.");

        add_contact(&args(&["Jane", ""]), &mut book);
        assert_eq!(show_phones(&args(&["Jane"]), &book), "No phones saved.");
    }

    #[test]
    fn test_show_all() {
        let mut book = AddressBook::new();
        assert_eq!(show_all(&book), "AddressBook: <empty>");

        add_contact(&args(&["Jane", "1234567890"]), &mut book);
        assert_eq!(
            show_all(&book),
            "Contact name: Jane, phones: 1234567890, birthday: N/A"
        );
    }

    #[test]
    fn test_delete_contact() {
        let mut book = AddressBook::new();
        add_contact(&args(&["Jane", "1234567890"]), &mut book);

        assert_eq!(delete_contact(&args(&["Jane"]), &mut book), "Contact deleted.");
        assert_eq!(
            delete_contact(&args(&["Jane"]), &mut book),
            "Error: Contact not found."
        );
        assert!(book.is_empty());
    }
}
