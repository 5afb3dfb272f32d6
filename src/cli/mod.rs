//! Interactive command-line front end.
//!
//! - **command**: turns a raw input line into a [`Command`]
//! - **interrupt**: Ctrl-C listener
//! - **session**: owns the address book and runs the read-eval-print loop

mod command;
mod interrupt;
mod session;

pub use command::{Command, EXIT_KEYWORDS, HELP_TEXT};
pub use interrupt::interrupt_listener;
pub use session::{Outcome, Session, GOODBYE, WELCOME};
