// src/prompt.rs

//! Interactive yes/no confirmation
//!
//! The only user input this tool accepts. A prompt loops until the answer
//! parses as an affirmative or negative token; everything else re-prompts.
//! SIGINT is handled by the process-global handler installed in main, not
//! here.

use crate::error::{Error, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Capability seam for asking the user yes/no questions
pub trait Prompter {
    /// Ask a yes/no question, looping until a valid answer arrives
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Prompter backed by stdin/stdout
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let stdin = std::io::stdin();
        let mut reader = stdin.lock();
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        confirm_from(&mut reader, &mut writer, question)
    }
}

/// Parse one trimmed answer line; `None` means re-prompt
fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Confirmation loop over arbitrary reader/writer, for testability
///
/// Re-prompts on unrecognized input. Returns `Error::InputClosed` if the
/// reader reaches EOF before a valid answer; that surfaces through the
/// top-level generic-error path.
pub fn confirm_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
) -> Result<bool> {
    loop {
        write!(writer, "{}", format!("{} (y/n): ", question).yellow())?;
        writer.flush()?;

        let mut line = String::new();
        let read = reader.read_line(&mut line)?;
        if read == 0 {
            return Err(Error::InputClosed);
        }

        match parse_answer(&line) {
            Some(answer) => return Ok(answer),
            None => writeln!(writer, "{}", "Please enter 'y' or 'n'.".red())?,
        }
    }
}
