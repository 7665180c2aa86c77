use crate::application::errors::BookError;
use crate::application::services::AddressBook;
use crate::domain::entities::{Command, CommandKind, Record};

/// Service executing parsed commands against the address book
#[derive(Debug, Default)]
pub struct CommandService {
    book: AddressBook,
}

impl CommandService {
    pub fn new(book: AddressBook) -> Self {
        Self { book }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run a command; `Ok(None)` means there is nothing to print
    pub fn handle(&mut self, command: Command) -> Result<Option<String>, BookError> {
        let response = match command {
            Command::Add { name, phones } => {
                let record = Record::with_phones(name, phones)?;
                self.book.add_record(record)?
            }
            Command::Update { name, action } => self.book.update_record(&name, action)?,
            Command::Delete { name } => self.book.delete_record(&name)?,
            Command::Phone { name } => {
                let phones: Vec<String> = self
                    .book
                    .show_phones(&name)?
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                format!("{}: [{}]", name, phones.join(", "))
            }
            Command::Show => {
                if self.book.is_empty() {
                    "Address book is empty".to_string()
                } else {
                    self.book
                        .show_all()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Command::Help { topic } => self.get_help(topic.as_deref()),
            Command::Exit => return Ok(None),
        };
        Ok(Some(response))
    }

    pub fn get_help(&self, command: Option<&str>) -> String {
        if let Some(name) = command {
            if let Some(kind) = CommandKind::find(name) {
                return format!("{} - {}\nUsage: {}", kind.name(), kind.description(), kind.usage());
            }
            return format!("Command {} not found", name);
        }

        // List all commands
        let mut help = "Available commands:".to_string();
        for kind in CommandKind::ALL {
            help.push_str(&format!("\n  {} - {}", kind.name(), kind.usage()));
        }
        help
    }
}
