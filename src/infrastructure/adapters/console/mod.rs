//! Console adapter - line-oriented terminal over any reader/writer

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::application::errors::SessionError;
use crate::domain::traits::Terminal;

/// Console terminal reading commands from `R` and printing replies to `W`
pub struct ConsoleAdapter<R, W> {
    input: R,
    output: W,
}

impl ConsoleAdapter<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleAdapter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Terminal for ConsoleAdapter<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn send_message(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}
