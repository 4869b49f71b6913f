//! Yes/no confirmation on top of the interactive reader.

use crate::core::interrupt::InterruptSource;
use crate::core::reader::Prompter;
use crate::error::{InputError, Result};
use crate::models::prompt_options::PromptOptions;
use crate::util::terminal::Terminal;

/// Match an answer against `y`, `yes`, `n`, `no`, ignoring case.
pub fn parse_yes_no(answer: &str) -> std::result::Result<bool, InputError> {
    match answer.to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err(InputError::yes_no()),
    }
}

impl<T: Terminal, S: InterruptSource> Prompter<T, S> {
    /// Ask a yes/no question once. An unrecognised answer is an input error
    /// with [`InputError::yes_no_not_provided`] set; re-asking is up to the
    /// caller.
    pub fn acquire_yes_no(&self, message: &str, options: &PromptOptions) -> Result<bool> {
        let message = format!("{}{}", message, options.yes_no_suffix_format());
        let answer = self.acquire_input(&message, options)?;
        Ok(parse_yes_no(&answer)?)
    }
}

/// [`Prompter::acquire_yes_no`] on stdin/stdout.
pub fn acquire_yes_no(message: &str, options: &PromptOptions) -> Result<bool> {
    Prompter::stdio().acquire_yes_no(message, options)
}
