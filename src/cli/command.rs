//! Line parsing for the command-line front end.

use crate::commands::usage;
use crate::error::{AddressBookError, CommandResult};

/// Keywords that end the session.
pub const EXIT_KEYWORDS: [&str; 4] = ["exit", "close", "goodbye", "quit"];

/// Command summary printed at startup and by `help`.
pub const HELP_TEXT: &str = "\
Available commands:
  add <name> <phone>                    - Add a contact or another phone (10 digits).
  change <name> <old_phone> <new_phone> - Replace a phone (10 digits).
  phone <name>                          - Show all phones for a contact.
  all                                   - Show all contacts.
  add-birthday <name> <DD.MM.YYYY>      - Add a birthday to a contact.
  show-birthday <name>                  - Show a contact's birthday.
  birthdays                             - Show upcoming birthdays (7 days; weekend -> Monday).
  delete <name>                         - Delete a contact.
  help                                  - Show this help.
  exit | close | goodbye | quit         - Exit the program.";

/// One parsed input line.
///
/// Names may span several words: every token before the trailing
/// positional arguments is part of the name, joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { name: String, phone: String },
    Change { name: String, old_phone: String, new_phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    Help,
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse a raw line. Blank lines yield `Ok(None)`.
    ///
    /// The keyword is case-insensitive; arguments are split on whitespace.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::Usage` when a known command has too few
    /// arguments.
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        let keyword = keyword.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        let command = match keyword.as_str() {
            "add" => {
                let (name, [phone]) = split_name::<1>(&args, usage::ADD)?;
                Command::Add { name, phone }
            }
            "change" => {
                let (name, [old_phone, new_phone]) = split_name::<2>(&args, usage::CHANGE)?;
                Command::Change {
                    name,
                    old_phone,
                    new_phone,
                }
            }
            "phone" => Command::Phone {
                name: whole_name(&args, usage::PHONE)?,
            },
            "all" => Command::All,
            "add-birthday" => {
                let (name, [date]) = split_name::<1>(&args, usage::ADD_BIRTHDAY)?;
                Command::AddBirthday { name, date }
            }
            "show-birthday" => Command::ShowBirthday {
                name: whole_name(&args, usage::SHOW_BIRTHDAY)?,
            },
            "birthdays" => Command::Birthdays,
            "delete" => Command::Delete {
                name: whole_name(&args, usage::DELETE)?,
            },
            "help" => Command::Help,
            kw if EXIT_KEYWORDS.contains(&kw) => Command::Exit,
            _ => Command::Unknown(keyword),
        };

        Ok(Some(command))
    }
}

/// Split `args` into a multi-word name and `N` trailing arguments.
///
/// At least one name token is required.
fn split_name<const N: usize>(
    args: &[&str],
    usage: &'static str,
) -> CommandResult<(String, [String; N])> {
    if args.len() <= N {
        return Err(AddressBookError::Usage(usage));
    }
    let (name, rest) = args.split_at(args.len() - N);
    let trailing = std::array::from_fn(|i| rest[i].to_string());
    Ok((name.join(" "), trailing))
}

/// All of `args` as one name.
fn whole_name(args: &[&str], usage: &'static str) -> CommandResult<String> {
    if args.is_empty() {
        return Err(AddressBookError::Usage(usage));
    }
    Ok(args.join(" "))
}
