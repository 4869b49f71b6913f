//! Prompt configuration and rendering.

use crate::constants;
use serde::{Deserialize, Serialize};

/// How a prompt is displayed and whether input is echoed.
///
/// Empty strings count as unset; the defaults in [`constants`] apply when
/// the prompt is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptOptions {
    /// Read the answer without echoing it.
    #[serde(default)]
    pub hide_input: bool,

    /// Appended to yes/no prompts.
    #[serde(default, alias = "yes_no_suffix")]
    pub yes_no_message: Option<String>,

    /// Written before the prompt message.
    #[serde(default)]
    pub input_prefix: Option<String>,

    /// Written after the prompt message.
    #[serde(default)]
    pub input_suffix: Option<String>,
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

impl PromptOptions {
    pub fn hidden() -> Self {
        Self {
            hide_input: true,
            ..Self::default()
        }
    }

    pub fn with_yes_no_message(mut self, message: impl Into<String>) -> Self {
        self.yes_no_message = Some(message.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.input_prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.input_suffix = Some(suffix.into());
        self
    }

    pub fn yes_no_suffix_format(&self) -> &str {
        or_default(&self.yes_no_message, constants::DEFAULT_YES_NO_SUFFIX)
    }

    pub fn input_prefix_format(&self) -> &str {
        or_default(&self.input_prefix, constants::DEFAULT_INPUT_PREFIX)
    }

    pub fn input_suffix_format(&self) -> &str {
        or_default(&self.input_suffix, constants::DEFAULT_INPUT_SUFFIX)
    }

    /// Full prompt line: prefix, message, suffix.
    pub fn render(&self, message: &str) -> String {
        format!(
            "{}{}{}",
            self.input_prefix_format(),
            message,
            self.input_suffix_format()
        )
    }
}
