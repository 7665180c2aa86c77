//! Command handling - Line parsing and dispatching

pub mod dispatcher;
pub mod parser;

pub use dispatcher::{CommandDispatcher, Reply};
pub use parser::CommandParser;
