//! Domain entities - Core business objects with no external dependencies

pub mod command;
pub mod record;

pub use command::{Command, CommandKind, UpdateAction};
pub use record::{Phone, Record};
