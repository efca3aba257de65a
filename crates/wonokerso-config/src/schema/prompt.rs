//! Prompt assembly settings.

use serde::{Deserialize, Serialize};

/// Layout of the grounding preamble.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PromptStyleConfig {
    /// One `- fact` line per value under a heading.
    #[default]
    Bulleted,
    /// `key: value` lines after a `Jawab:` lead-in.
    KeyValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub style: PromptStyleConfig,
    /// Heading line of the bulleted style.
    pub heading: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            style: PromptStyleConfig::Bulleted,
            heading: "Informasi Desa Wonokerso:".into(),
        }
    }
}
