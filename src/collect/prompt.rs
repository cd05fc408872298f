use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::CollectError;

/// Line-based question/answer channel with the operator.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` on its own line and returns the answer without its
    /// line ending. Other whitespace is kept.
    pub fn ask(&mut self, prompt: &str) -> Result<String, CollectError> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(CollectError::InputClosed(prompt.to_owned()));
        }
        let answer = buf.strip_suffix('\n').unwrap_or(&buf);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_owned())
    }

    /// True only for `y`, ignoring surrounding spaces.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, CollectError> {
        Ok(self.ask(prompt)?.trim() == "y")
    }

    /// True only for `n`, ignoring surrounding spaces; anything else keeps going.
    pub fn decline(&mut self, prompt: &str) -> Result<bool, CollectError> {
        Ok(self.ask(prompt)?.trim() == "n")
    }
}
