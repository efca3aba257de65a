//! Validation for smaller config sections: knowledge, prompt, reveal,
//! and display.

use crate::schema::{ChatbotConfig, PromptStyleConfig};

use super::helpers::{validate_non_empty, validate_range};

pub(crate) fn validate_knowledge(errors: &mut Vec<String>, config: &ChatbotConfig) {
    validate_non_empty(errors, "knowledge.source", &config.knowledge.source);
}

pub(crate) fn validate_prompt(errors: &mut Vec<String>, config: &ChatbotConfig) {
    if config.prompt.style == PromptStyleConfig::Bulleted {
        validate_non_empty(errors, "prompt.heading", &config.prompt.heading);
    }
}

pub(crate) fn validate_reveal(errors: &mut Vec<String>, config: &ChatbotConfig) {
    validate_range(
        errors,
        "reveal.char_delay_ms",
        config.reveal.char_delay_ms,
        0,
        1000,
    );
}

pub(crate) fn validate_display(errors: &mut Vec<String>, config: &ChatbotConfig) {
    validate_non_empty(errors, "display.bot_name", &config.display.bot_name);
    validate_non_empty(errors, "display.user_name", &config.display.user_name);
}
