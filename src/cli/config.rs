//! Prompt config file loading.

use crate::models::config_file::ConfigFile;
use crate::models::prompt_options::PromptOptions;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn load(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read prompt config {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("parse prompt config {}", path.display()))?;
    Ok(config)
}

/// Prompt options from the given config file, or the defaults.
pub fn resolve(path: Option<&Path>) -> Result<PromptOptions> {
    match path {
        Some(path) => Ok(load(path)?.prompt),
        None => Ok(PromptOptions::default()),
    }
}
