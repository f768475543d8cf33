//! Validated prompts
//!
//! Every prompt re-asks until the answer is acceptable. Only the end of the
//! input stream (or a failing writer) gets out of a prompt without a value.

use std::io::Write;

use crate::error::{ListingError, ListingResult};
use crate::services::SortKey;

use super::input::InputSource;

const BAD_INT: &str = "\nIncorrect, please enter digits > 0\n";
const BAD_FLOAT: &str = "\nIncorrect, please enter digits > 0.0!\n";
const BAD_SORT_KEY: &str = "\nIncorrect, please enter a, b, c or d!\n";
const BAD_YES_NO: &str = "\nIncorrect, please enter Y or N!\n";
const BAD_TEXT: &str = "\nIncorrect, please enter some text!\n";

/// Console input and output for the shell
pub struct Console<I, W> {
    input: I,
    output: W,
}

impl<I: InputSource, W: Write> Console<I, W> {
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the input and output
    pub fn into_parts(self) -> (I, W) {
        (self.input, self.output)
    }

    /// Print a line
    pub fn say(&mut self, text: &str) -> ListingResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show a prompt and read one line
    pub fn ask(&mut self, prompt: &str) -> ListingResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        self.input
            .read_line()?
            .ok_or_else(|| ListingError::Input(format!("no answer to '{}'", prompt.trim())))
    }

    /// Ask until `parse` accepts the answer, printing `complaint` after each rejection
    pub fn ask_until<T, F>(&mut self, prompt: &str, complaint: &str, parse: F) -> ListingResult<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        self.ask_checked(prompt, |s| parse(s).ok_or(complaint))
    }

    /// Ask until `check` accepts the answer, printing the reason it gives for each rejection
    pub fn ask_checked<T, E, F>(&mut self, prompt: &str, check: F) -> ListingResult<T>
    where
        E: AsRef<str>,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match check(&answer) {
                Ok(value) => return Ok(value),
                Err(reason) => self.say(reason.as_ref())?,
            }
        }
    }

    /// Ask for a whole number that is not negative
    pub fn ask_non_negative_int(&mut self, prompt: &str) -> ListingResult<u64> {
        self.ask_until(prompt, BAD_INT, parse_non_negative_int)
    }

    /// Ask for a real number that is not negative; a decimal comma is accepted
    pub fn ask_non_negative_float(&mut self, prompt: &str) -> ListingResult<f64> {
        self.ask_until(prompt, BAD_FLOAT, parse_non_negative_float)
    }

    /// Ask for a real number strictly greater than zero
    pub fn ask_positive_float(&mut self, prompt: &str) -> ListingResult<f64> {
        self.ask_until(prompt, BAD_FLOAT, |s| {
            parse_non_negative_float(s).filter(|v| *v > 0.0)
        })
    }

    /// Ask for one of the sort key letters a-d
    pub fn ask_sort_key(&mut self, prompt: &str) -> ListingResult<SortKey> {
        self.ask_until(prompt, BAD_SORT_KEY, SortKey::parse)
    }

    /// Ask a Y/N question
    pub fn ask_yes_no(&mut self, prompt: &str) -> ListingResult<bool> {
        self.ask_until(prompt, BAD_YES_NO, parse_yes_no)
    }

    /// Ask for free text that is not blank
    pub fn ask_text(&mut self, prompt: &str) -> ListingResult<String> {
        self.ask_until(prompt, BAD_TEXT, |s| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
    }
}

/// Parse a non-negative whole number
pub fn parse_non_negative_int(s: &str) -> Option<u64> {
    s.trim().parse::<u64>().ok()
}

/// Parse a non-negative finite real number, accepting a decimal comma
pub fn parse_non_negative_float(s: &str) -> Option<f64> {
    s.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Parse a Y/N answer (case-insensitive)
pub fn parse_yes_no(s: &str) -> Option<bool> {
    match s.trim().to_uppercase().as_str() {
        "Y" => Some(true),
        "N" => Some(false),
        _ => None,
    }
}
