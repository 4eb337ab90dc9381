//! Line-oriented console input and output.

use std::io::{BufRead, Write};

use super::MenuError;

/// Reads answers from `input` and writes prompts and messages to `output`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` without a newline and read one trimmed answer.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected. Fails with
    /// [`MenuError::EndOfInput`] once the input is exhausted.
    pub fn ask(&mut self, question: &str) -> Result<String, MenuError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(MenuError::EndOfInput);
        }

        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Print one line.
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<(), MenuError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
