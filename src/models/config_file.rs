//! Config file model.

use crate::models::prompt_options::PromptOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub prompt: PromptOptions,
}
