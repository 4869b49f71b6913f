//! Data structures for prompt configuration.

pub mod config_file;
pub mod prompt_options;
