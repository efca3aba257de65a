//! Answer client struct and query building.

use crate::{AnswerRequest, ChatError};

use super::config::AnswerClientConfig;

/// reqwest-backed answer client.
pub struct HttpAnswerClient {
    pub(crate) config: AnswerClientConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpAnswerClient {
    pub fn new(config: AnswerClientConfig) -> Result<Self, ChatError> {
        let mut builder = reqwest::Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ChatError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &AnswerClientConfig {
        &self.config
    }

    /// Shared reqwest client, reused for fetching remote knowledge.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Query pairs for a request, in the order they appear in the URL.
    pub(crate) fn query_pairs<'a>(&'a self, request: &AnswerRequest<'a>) -> Vec<(&'a str, &'a str)> {
        let mut pairs = vec![
            (self.config.question_param.as_str(), request.question),
            (self.config.prompt_param.as_str(), request.prompt),
        ];
        if let Some(ref param) = self.config.session_param {
            pairs.push((param.as_str(), request.session_id.as_str()));
        }
        pairs
    }
}
