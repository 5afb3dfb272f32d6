//! Address Book - an interactive command-line contact manager.
//!
//! Contacts (a name, any number of ten-digit phone numbers and an optional
//! birthday) are kept in memory for the lifetime of the session. Besides the
//! usual add/change/delete/lookup commands, the book can list whose birthday
//! falls in the coming week, moving weekend birthdays to the next Monday.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, birthday)
//! - **models**: the contact `Record`
//! - **directory**: the `AddressBook` and the upcoming-birthday query
//! - **commands**: command operations returning user-facing text
//! - **cli**: line parsing and the interactive session loop
//! - **config**: configuration from environment variables
//! - **error**: custom error types

pub mod cli;
pub mod commands;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use cli::{Command, Outcome, Session};
pub use config::Config;
pub use directory::{AddressBook, UpcomingBirthday};
pub use domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
pub use error::{AddressBookError, CommandResult, ConfigError};
pub use models::Record;
