//! The command layer.
//!
//! Parses input lines, runs the matching handler against an explicitly owned
//! [`AddressBook`], and turns every outcome (including errors) into the text
//! shown to the user.

pub mod handlers;
pub mod parser;

pub use handlers::AddOutcome;
pub use parser::{parse_input, Command, ParsedInput};

use crate::clock::Clock;
use crate::metrics::{CommandTimer, Metrics};
use crate::models::{AddressBook, BirthdayWindow};
use crate::session::FAREWELL;
use tracing::{debug, warn};

/// What the session should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading
    Message(String),
    /// Blank input; print nothing
    Nothing,
    /// Print the farewell and end the session
    Exit(String),
}

/// The assistant's state for one session: the address book plus what the
/// commands need from the outside world.
pub struct Assistant {
    book: AddressBook,
    clock: Box<dyn Clock>,
    window: BirthdayWindow,
    metrics: Metrics,
}

impl Assistant {
    /// Create an assistant around `book`.
    pub fn new(book: AddressBook, clock: Box<dyn Clock>, window: BirthdayWindow) -> Self {
        Self {
            book,
            clock,
            window,
            metrics: Metrics::new(),
        }
    }

    /// The address book.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Metrics collected so far.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Handle one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some(input) = parse_input(line) else {
            return Reply::Nothing;
        };

        let command = match input.command.parse::<Command>() {
            Ok(command) => command,
            Err(unknown) => {
                debug!(command = %unknown, "Unknown command");
                self.metrics.record_unknown_command();
                return Reply::Message("Invalid command.".to_string());
            }
        };

        debug!(command = %command, args = input.args.len(), "Dispatching command");
        let Self {
            ref mut book,
            ref clock,
            ref window,
            ref metrics,
        } = *self;
        let args = input.args.as_slice();
        let timer = CommandTimer::new(metrics);
        let contacts_before = book.len();
        let result = match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add => handlers::add_contact(args, book).map(|outcome| match outcome {
                AddOutcome::Created => "Contact added.".to_string(),
                AddOutcome::Updated => "Contact updated.".to_string(),
            }),
            Command::Change => handlers::change_contact(args, book),
            Command::Phone => handlers::phone_contact(args, book),
            Command::All => Ok(handlers::show_all_contacts(book)),
            Command::AddBirthday => handlers::add_birthday(args, book),
            Command::ShowBirthday => handlers::show_birthday(args, book),
            Command::Birthdays => {
                let today = clock.today();
                debug!(%today, days = window.days, "Computing upcoming birthdays");
                Ok(handlers::birthdays(book, today, window))
            }
            Command::Exit => return Reply::Exit(FAREWELL.to_string()),
        };

        // `add` with a bad phone still creates the contact
        if book.len() > contacts_before {
            metrics.record_contact_created();
        }

        match result {
            Ok(message) => {
                timer.complete();
                Reply::Message(message)
            }
            Err(e) => {
                timer.complete_with_error();
                warn!(command = %command, error = %e, "Command failed");
                Reply::Message(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn assistant() -> Assistant {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        Assistant::new(
            AddressBook::new(),
            Box::new(FixedClock(today)),
            BirthdayWindow::default(),
        )
    }

    fn message(text: &str) -> Reply {
        Reply::Message(text.to_string())
    }

    #[test]
    fn test_hello_and_exit() {
        let mut assistant = assistant();
        assert_eq!(assistant.handle_line("hello"), message("How can I help you?"));
        assert_eq!(assistant.handle_line("exit"), Reply::Exit("Good bye!".to_string()));
        assert_eq!(assistant.handle_line("close"), Reply::Exit("Good bye!".to_string()));
        assert_eq!(assistant.metrics().commands_total(), 1);
        assert_eq!(assistant.metrics().command_errors_total(), 0);
    }

    #[test]
    fn test_blank_and_unknown_lines() {
        let mut assistant = assistant();
        assert_eq!(assistant.handle_line("   "), Reply::Nothing);
        assert_eq!(assistant.handle_line("delete John"), message("Invalid command."));
        assert_eq!(assistant.metrics().unknown_commands_total(), 1);
    }

    #[test]
    fn test_add_replies() {
        let mut assistant = assistant();
        assert_eq!(
            assistant.handle_line("add John 1234567890"),
            message("Contact added.")
        );
        assert_eq!(
            assistant.handle_line("add John 0987654321"),
            message("Contact updated.")
        );
        assert_eq!(
            assistant.handle_line("add John"),
            message("Not enough arguments.")
        );
        assert_eq!(
            assistant.handle_line("add Jane 123"),
            message("Phone number must be 10 digits.")
        );
        assert_eq!(assistant.book().len(), 2);
        assert_eq!(assistant.metrics().contacts_created_total(), 2);
        assert_eq!(assistant.metrics().command_errors_total(), 2);
    }

    #[test]
    fn test_birthdays_uses_clock() {
        let mut assistant = assistant();
        assistant.handle_line("add John 1234567890");
        assistant.handle_line("add-birthday John 15.06.1990");
        assert_eq!(
            assistant.handle_line("birthdays"),
            message("John: 17.06.2024")
        );
    }
}
