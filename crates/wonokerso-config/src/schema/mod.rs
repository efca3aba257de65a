//! Configuration schema types for the chatbot.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults of the village widget.

mod display;
mod endpoint;
mod knowledge;
mod prompt;
mod reveal;
mod system;

pub use display::*;
pub use endpoint::*;
pub use knowledge::*;
pub use prompt::*;
pub use reveal::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatbotConfig {
    pub endpoint: EndpointConfig,
    pub knowledge: KnowledgeConfig,
    pub prompt: PromptConfig,
    pub reveal: RevealConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
