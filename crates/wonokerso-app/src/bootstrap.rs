//! Turns the loaded configuration into chat engine parts.

use std::path::Path;
use std::time::Duration;

use wonokerso_chat::{
    AnswerClientConfig, KnowledgeSource, PromptBuilder, PromptStyle, RevealSettings,
};
use wonokerso_common::ConfigError;
use wonokerso_config::schema::{
    EndpointConfig, KnowledgeConfig, PromptConfig, PromptStyleConfig, RevealConfig,
};
use wonokerso_config::ChatbotConfig;

/// Load the config from `path`, or from the platform default location.
pub fn load_config(path: Option<&Path>) -> Result<ChatbotConfig, ConfigError> {
    match path {
        Some(path) => wonokerso_config::load_from_path(path),
        None => wonokerso_config::load_default(),
    }
}

pub fn client_config(endpoint: &EndpointConfig) -> AnswerClientConfig {
    let request_timeout = (endpoint.request_timeout_secs > 0)
        .then(|| Duration::from_secs(u64::from(endpoint.request_timeout_secs)));

    AnswerClientConfig::new(endpoint.url.clone())
        .with_params(endpoint.question_param.clone(), endpoint.prompt_param.clone())
        .with_session_param(endpoint.session_param().map(String::from))
        .with_connect_timeout(Duration::from_secs(u64::from(endpoint.connect_timeout_secs)))
        .with_request_timeout(request_timeout)
}

pub fn prompt_builder(prompt: &PromptConfig) -> PromptBuilder {
    let style = match prompt.style {
        PromptStyleConfig::Bulleted => PromptStyle::Bulleted {
            heading: prompt.heading.clone(),
        },
        PromptStyleConfig::KeyValue => PromptStyle::KeyValue,
    };
    PromptBuilder::new(style)
}

pub fn reveal_settings(reveal: &RevealConfig, no_reveal: bool) -> RevealSettings {
    if no_reveal || !reveal.enabled {
        RevealSettings::disabled()
    } else {
        RevealSettings::new(Duration::from_millis(u64::from(reveal.char_delay_ms)))
    }
}

/// The command-line source wins over the configured one.
pub fn knowledge_source(knowledge: &KnowledgeConfig, cli_override: Option<&str>) -> KnowledgeSource {
    KnowledgeSource::parse(cli_override.unwrap_or(&knowledge.source))
}
