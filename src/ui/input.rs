//! Line-oriented prompt helpers
//!
//! Every prompt re-asks until the input parses; out-of-range values are
//! the caller's problem (the session re-prompts through its validators).
//! A closed stdin surfaces as [`SessionError::InputClosed`] so the
//! session can end instead of spinning.

use std::io::{self, BufRead, Write};

use crate::error::SessionError;

fn read_line() -> Result<Option<String>, io::Error> {
    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Prompt until the user enters an integer.
pub fn prompt_number(prompt: &str) -> Result<i64, SessionError> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;
        let line = read_line()?.ok_or(SessionError::InputClosed)?;
        if let Ok(value) = line.trim().parse() {
            return Ok(value);
        }
    }
}

/// Prompt until the user enters a non-empty line; returns its first
/// character, uppercased.
pub fn prompt_char(prompt: &str) -> Result<char, SessionError> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;
        let line = read_line()?.ok_or(SessionError::InputClosed)?;
        if let Some(first) = line.trim().chars().next() {
            return Ok(first.to_ascii_uppercase());
        }
    }
}

/// Prompt for a full word, trimmed and lowercased.
pub fn prompt_word(prompt: &str) -> Result<String, SessionError> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;
        let line = read_line()?.ok_or(SessionError::InputClosed)?;
        let word = line.trim().to_ascii_lowercase();
        if !word.is_empty() {
            return Ok(word);
        }
    }
}
