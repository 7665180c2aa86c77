use crate::application::errors::SessionError;

/// Terminal trait - abstraction for the line-oriented user interface
pub trait Terminal {
    /// Show `prompt` and read the next line; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError>;

    /// Print a reply to the user
    fn send_message(&mut self, text: &str) -> Result<(), SessionError>;
}
