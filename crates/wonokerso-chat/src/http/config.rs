//! Answer endpoint client configuration.

use std::time::Duration;

/// Where and how questions are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerClientConfig {
    pub endpoint: String,
    pub question_param: String,
    pub prompt_param: String,
    /// `None` leaves the session id out of the query.
    pub session_param: Option<String>,
    pub connect_timeout: Duration,
    /// `None` waits for the endpoint indefinitely.
    pub request_timeout: Option<Duration>,
}

impl AnswerClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            question_param: "text".to_string(),
            prompt_param: "prompt".to_string(),
            session_param: Some("sessionId".to_string()),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }

    pub fn with_params(
        mut self,
        question_param: impl Into<String>,
        prompt_param: impl Into<String>,
    ) -> Self {
        self.question_param = question_param.into();
        self.prompt_param = prompt_param.into();
        self
    }

    pub fn with_session_param(mut self, param: Option<String>) -> Self {
        self.session_param = param;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}
