//! Operator prompts and privilege checks for interactive CLI tools.
//!
//! Reads a visible line or a masked secret from the terminal, asks yes/no
//! questions, and checks for root/Administrator rights. Masked reads put the
//! terminal in raw mode and restore it on every exit path, including an
//! interrupt.
//!
//! ## Modules
//! - `cli` — Command-line handlers for the bundled binary
//! - `core` — Interactive reader, interrupt watcher, yes/no interpreter
//! - `models` — Prompt options and config file model
//! - `util` — Terminal device, signals, privilege checks

pub mod cli;
pub mod constants;
pub mod core;
pub mod error;
pub mod models;
pub mod util;

pub use crate::core::reader::{acquire_input, Prompter};
pub use crate::core::yes_no::{acquire_yes_no, parse_yes_no};
pub use crate::error::{Error, InputError, Result, UserError};
pub use crate::models::prompt_options::PromptOptions;
pub use crate::util::privilege::is_privileged;
