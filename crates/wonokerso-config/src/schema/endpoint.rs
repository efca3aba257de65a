//! Answer endpoint configuration types.

use serde::{Deserialize, Serialize};

/// Remote answer-generation endpoint.
///
/// The endpoint is called with a single GET request whose query carries the
/// user's question, the assembled prompt, and optionally the session id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub url: String,
    /// Query parameter carrying the raw user question.
    pub question_param: String,
    /// Query parameter carrying the assembled prompt.
    pub prompt_param: String,
    /// Query parameter carrying the session id. Empty disables it.
    pub session_param: String,
    /// Connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds. 0 disables (valid range: 0-600).
    pub request_timeout_secs: u32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: "https://api.ryzumi.vip/api/ai/chatgpt".into(),
            question_param: "text".into(),
            prompt_param: "prompt".into(),
            session_param: "sessionId".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 0,
        }
    }
}

impl EndpointConfig {
    /// Session parameter name, or `None` when sending the id is disabled.
    pub fn session_param(&self) -> Option<&str> {
        let name = self.session_param.trim();
        (!name.is_empty()).then_some(name)
    }
}
