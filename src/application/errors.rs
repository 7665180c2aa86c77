//! Application layer errors

use thiserror::Error;

/// Address book operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("User with name {0} already exist")]
    DuplicateName(String),

    #[error("{phone} is already in the {name} record")]
    DuplicateEntry { name: String, phone: String },

    #[error("Record with name {0} doesn't exist!")]
    RecordNotFound(String),

    #[error("Phone {phone} not found in the {name} record")]
    PhoneNotFound { name: String, phone: String },
}

impl BookError {
    /// Hint printed under the error message, when there is one
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            BookError::PhoneNotFound { .. } => Some("Phone not found!"),
            BookError::RecordNotFound(_) => Some("Record not found!"),
            _ => None,
        }
    }
}

/// Command parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Wrong command!")]
    Unknown(String),

    #[error("Wrong number of arguments for {command}")]
    InvalidArgs { command: String, usage: &'static str },

    #[error("Unknown update action: {0}")]
    UnknownAction(String),
}

impl CommandError {
    pub fn usage(&self) -> &'static str {
        match self {
            CommandError::Unknown(_) => "Type help to see available commands",
            CommandError::InvalidArgs { usage, .. } => *usage,
            CommandError::UnknownAction(_) => crate::domain::entities::command::UPDATE_USAGE,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Terminal errors, the only ones that end a session early
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
