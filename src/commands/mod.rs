//! Command operations.
//!
//! Each operation takes the already-tokenized arguments of one command and
//! the address book, performs the lookup or mutation, and returns the text
//! to show the user. Failures never escape an operation: they are rendered
//! as `Error: <message>`.

mod birthdays;
mod contacts;

pub use birthdays::{add_birthday, birthdays, show_birthday};
pub use contacts::{add_contact, change_contact, delete_contact, show_all, show_phones};

use crate::error::CommandResult;
use tracing::warn;

/// Usage lines, shared by the operations and the command-line parser.
pub mod usage {
    pub const ADD: &str = "add <name> <phone>";
    pub const CHANGE: &str = "change <name> <old_phone> <new_phone>";
    pub const PHONE: &str = "phone <name>";
    pub const ADD_BIRTHDAY: &str = "add-birthday <name> <DD.MM.YYYY>";
    pub const SHOW_BIRTHDAY: &str = "show-birthday <name>";
    pub const DELETE: &str = "delete <name>";
}

/// Turn an operation's outcome into the line shown to the user.
fn render(result: CommandResult<String>) -> String {
    result.unwrap_or_else(|err| {
        warn!(error = %err, "Command failed");
        format!("Error: {}", err)
    })
}
