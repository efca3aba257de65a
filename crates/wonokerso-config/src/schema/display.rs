//! Labels used by the conversation renderer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub bot_name: String,
    pub user_name: String,
    /// Shown in place of the message list while it is empty.
    pub empty_text: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Chat with Wonokerso Bot".into(),
            bot_name: "Wonokerso Bot".into(),
            user_name: "You".into(),
            empty_text: "No messages yet. Ask about Desa Wonokerso!".into(),
        }
    }
}
