//! Input providers for the interactive shell
//!
//! The shell reads one line at a time through [`InputSource`], so prompts can
//! be driven by stdin in production and by a script in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::error::{ListingError, ListingResult};

/// A source of console input lines
pub trait InputSource {
    /// Read the next line without its terminator, or `None` at end of input
    fn read_line(&mut self) -> ListingResult<Option<String>>;
}

/// Reads lines from standard input
#[derive(Debug, Default)]
pub struct StdinInput;

impl StdinInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for StdinInput {
    fn read_line(&mut self) -> ListingResult<Option<String>> {
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| ListingError::Io(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Replays a fixed list of lines, then reports end of input
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> ListingResult<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
