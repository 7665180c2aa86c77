use crate::application::errors::SessionError;
use crate::application::messaging::{CommandDispatcher, Reply};
use crate::domain::traits::Terminal;

/// Service running the read-dispatch-print loop over a terminal
pub struct SessionService<T: Terminal> {
    terminal: T,
    dispatcher: CommandDispatcher,
    prompt: String,
}

impl<T: Terminal> SessionService<T> {
    pub fn new(terminal: T, dispatcher: CommandDispatcher, prompt: impl Into<String>) -> Self {
        Self {
            terminal,
            dispatcher,
            prompt: prompt.into(),
        }
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    /// Loop until an exit command or end of input.
    /// Only terminal I/O failures are returned as errors.
    pub fn run(&mut self) -> Result<(), SessionError> {
        tracing::info!("Address book session started");

        while let Some(line) = self.terminal.read_line(&self.prompt)? {
            match self.dispatcher.process_text(&line) {
                Reply::Text(text) => self.terminal.send_message(&text)?,
                Reply::Silent => {}
                Reply::Exit => {
                    tracing::info!("Exit requested");
                    return Ok(());
                }
            }
        }

        tracing::info!("End of input, leaving session");
        Ok(())
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    pub fn into_parts(self) -> (T, CommandDispatcher) {
        (self.terminal, self.dispatcher)
    }
}
