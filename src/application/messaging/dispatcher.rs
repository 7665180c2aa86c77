//! Command dispatcher - Routes input lines to the command service

use super::parser::CommandParser;
use crate::application::errors::{BookError, CommandError};
use crate::application::services::{AddressBook, CommandService};
use crate::domain::entities::Command;

/// What the session should do after a line has been handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading
    Text(String),
    /// Nothing to print, keep reading
    Silent,
    /// Leave the loop
    Exit,
}

/// Command dispatcher - parses a line and runs it against the book.
/// Errors never escape: they are rendered into the reply text.
pub struct CommandDispatcher {
    parser: CommandParser,
    service: CommandService,
}

impl CommandDispatcher {
    pub fn new(case_insensitive: bool) -> Self {
        Self::with_book(AddressBook::new(), case_insensitive)
    }

    pub fn with_book(book: AddressBook, case_insensitive: bool) -> Self {
        Self {
            parser: CommandParser::new(case_insensitive),
            service: CommandService::new(book),
        }
    }

    pub fn book(&self) -> &AddressBook {
        self.service.book()
    }

    /// Process a raw input line
    pub fn process_text(&mut self, text: &str) -> Reply {
        match self.parser.parse(text) {
            Ok(Some(command)) => self.process(command),
            Ok(None) => Reply::Silent,
            Err(e) => {
                tracing::debug!("Usage error: {}", e);
                Reply::Text(render_usage_error(&e))
            }
        }
    }

    /// Process an already parsed command
    pub fn process(&mut self, command: Command) -> Reply {
        let kind = command.kind();
        tracing::debug!("Command: {} {:?}", kind.name(), command);

        if command == Command::Exit {
            return Reply::Exit;
        }

        match self.service.handle(command) {
            Ok(Some(response)) => Reply::Text(response),
            Ok(None) => Reply::Silent,
            Err(e) => {
                tracing::debug!("Command {} failed: {}", kind.name(), e);
                Reply::Text(render_book_error(&e))
            }
        }
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new(true)
    }
}

fn render_book_error(error: &BookError) -> String {
    match error.hint() {
        Some(hint) => format!("{}\n{}", error, hint),
        None => error.to_string(),
    }
}

fn render_usage_error(error: &CommandError) -> String {
    format!("{}\n{}", error, error.usage())
}
