//! Knowledge snippet source.

use serde::{Deserialize, Serialize};

/// Where the key/fact JSON document is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// File path or http(s) URL of the JSON document.
    pub source: String,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            source: "data.json".into(),
        }
    }
}
