//! # Confirmation Gate
//!
//! The single point where a pipeline waits on a human. Nothing is written to
//! the recipe server until `confirm` returns `true`.

use crate::errors::ToolkitError;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub trait Confirmation {
    /// Asks `question` and returns the user's yes/no answer.
    fn confirm(&mut self, question: &str) -> Result<bool, ToolkitError>;
}

/// Asks on a line-oriented terminal, re-asking until it gets `yes`/`y` or
/// `no`/`n`. End of input is taken as "no".
pub struct PromptConfirmation<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirmation<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptConfirmation<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
    Unclear,
}

fn parse_answer(line: &str) -> Answer {
    match line.trim().to_lowercase().as_str() {
        "yes" | "y" => Answer::Yes,
        "no" | "n" => Answer::No,
        _ => Answer::Unclear,
    }
}

impl<R: BufRead, W: Write> Confirmation for PromptConfirmation<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool, ToolkitError> {
        loop {
            write!(self.output, "{question} (yes/no): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(false);
            }

            match parse_answer(&line) {
                Answer::Yes => return Ok(true),
                Answer::No => return Ok(false),
                Answer::Unclear => writeln!(self.output, "Please enter 'yes' or 'no'.")?,
            }
        }
    }
}
