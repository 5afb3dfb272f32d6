//! The interactive session: dispatch plus the read-eval-print loop.

use super::command::{Command, HELP_TEXT};
use crate::commands;
use crate::config::Config;
use crate::directory::AddressBook;
use chrono::{Local, NaiveDate};
use std::borrow::Cow;
use std::future::Future;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Greeting printed when the session starts.
pub const WELCOME: &str = "Welcome to Address Book! Type 'help' to see available commands.";

/// Farewell printed when the session ends.
pub const GOODBYE: &str = "Goodbye!";

const UNKNOWN_COMMAND: &str = "Unknown command. Type 'help' to see available commands.";

/// What the loop should do after one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text (if any) and read the next line.
    Continue(Option<String>),

    /// Stop reading.
    Exit,
}

/// One interactive session and the address book it owns.
pub struct Session {
    book: AddressBook,
    config: Config,
    today: fn() -> NaiveDate,
}

impl Session {
    /// Create a session with an empty address book and the local-date clock.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, local_today)
    }

    /// Create a session whose notion of "today" comes from `today`.
    pub fn with_clock(config: Config, today: fn() -> NaiveDate) -> Self {
        Self {
            book: AddressBook::new(),
            config,
            today,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parse and execute one input line.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Outcome::Continue(None),
            Err(err) => return Outcome::Continue(Some(format!("Error: {}", err))),
        };
        debug!(?command, "Dispatching command");

        let output = match command {
            Command::Exit => return Outcome::Exit,
            Command::Help => HELP_TEXT.to_string(),
            Command::Add { name, phone } => commands::add_contact(&[name, phone], &mut self.book),
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => commands::change_contact(&[name, old_phone, new_phone], &mut self.book),
            Command::Phone { name } => commands::show_phones(&[name], &self.book),
            Command::All => commands::show_all(&self.book),
            Command::AddBirthday { name, date } => {
                commands::add_birthday(&[name, date], &mut self.book)
            }
            Command::ShowBirthday { name } => commands::show_birthday(&[name], &self.book),
            Command::Birthdays => commands::birthdays(&self.book, (self.today)()),
            Command::Delete { name } => commands::delete_contact(&[name], &mut self.book),
            Command::Unknown(keyword) => {
                debug!(%keyword, "Unknown command");
                UNKNOWN_COMMAND.to_string()
            }
        };

        Outcome::Continue(Some(output))
    }

    /// Run the read-eval-print loop until an exit command, end of input, or
    /// `interrupt` completes.
    ///
    /// Commands run one at a time; each result is written before the next
    /// line is read.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading `input` or writing `output`.
    pub async fn run<R, W, I>(
        &mut self,
        mut input: R,
        mut output: W,
        interrupt: I,
    ) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        I: Future<Output = ()>,
    {
        info!("Session started");
        write_line(&mut output, WELCOME).await?;
        if self.config.show_help_on_start {
            write_line(&mut output, HELP_TEXT).await?;
        }

        let mut buf = Vec::new();
        tokio::pin!(interrupt);

        loop {
            output.write_all(self.config.prompt.as_bytes()).await?;
            output.flush().await?;

            buf.clear();
            let read = tokio::select! {
                read = input.read_until(b'\n', &mut buf) => read?,
                () = &mut interrupt => {
                    info!("Interrupted");
                    0
                }
            };

            if read == 0 {
                // End of input or Ctrl-C: finish the prompt line first
                write_line(&mut output, "").await?;
                write_line(&mut output, GOODBYE).await?;
                break;
            }

            let line = decode_line(&buf);
            match self.handle_line(&line) {
                Outcome::Continue(Some(text)) => write_line(&mut output, &text).await?,
                Outcome::Continue(None) => {}
                Outcome::Exit => {
                    write_line(&mut output, GOODBYE).await?;
                    break;
                }
            }
        }

        output.flush().await?;
        info!(contacts = self.book.len(), "Session ended");
        Ok(())
    }
}

/// Decode one raw input line, dropping the line terminator.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of ending the session.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = String::from_utf8_lossy(raw);
    if let Cow::Owned(_) = line {
        warn!("Input line was not valid UTF-8");
    }
    line
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await
}
