//! Full configuration validation.
//!
//! Validates URLs, query parameter names, numeric ranges, and display
//! labels. Each domain has its own submodule; this orchestrator calls them
//! all and collects errors into a single `ConfigError`.

mod endpoint;
mod helpers;
mod misc;


use crate::schema::ChatbotConfig;
use wonokerso_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ChatbotConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    endpoint::validate_endpoint(&mut errors, config);
    misc::validate_knowledge(&mut errors, config);
    misc::validate_prompt(&mut errors, config);
    misc::validate_reveal(&mut errors, config);
    misc::validate_display(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
