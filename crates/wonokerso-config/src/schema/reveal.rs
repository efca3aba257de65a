//! Typing-reveal effect settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub enabled: bool,
    /// Delay per revealed character in milliseconds (valid range: 0-1000).
    pub char_delay_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            char_delay_ms: 50,
        }
    }
}
