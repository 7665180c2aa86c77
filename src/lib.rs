//! In-memory contact address book driven by line-oriented text commands.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::messaging::{CommandDispatcher, Reply};
pub use application::services::{AddressBook, SessionService};
pub use domain::entities::{Phone, Record};
pub use infrastructure::adapters::ConsoleAdapter;
pub use infrastructure::config::Config;
