//! The address book: every contact the session knows about.
//!
//! - **address_book**: insertion-ordered collection keyed by contact name
//! - **upcoming**: which birthdays fall within the next few days

mod address_book;
mod upcoming;

pub use address_book::AddressBook;
pub use upcoming::{UpcomingBirthday, UPCOMING_WINDOW_DAYS};
