//! AnswerClient trait implementation for HttpAnswerClient.

use async_trait::async_trait;
use tracing::{debug, warn};
use wonokerso_common::new_correlation_id;

use crate::{AnswerClient, AnswerReply, AnswerRequest, ChatError};

use super::client::HttpAnswerClient;

#[async_trait]
impl AnswerClient for HttpAnswerClient {
    async fn ask(&self, request: &AnswerRequest<'_>) -> Result<AnswerReply, ChatError> {
        let cid = new_correlation_id();
        debug!(
            %cid,
            endpoint = %self.config.endpoint,
            prompt_len = request.prompt.len(),
            "answer request"
        );

        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&self.query_pairs(request))
            .send()
            .await
            .map_err(|e| ChatError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%cid, status = status.as_u16(), "answer endpoint returned an error status");
            return Err(ChatError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.without_url().to_string()))?;

        let reply = AnswerReply::from_json_str(&body)?;
        if reply.result.is_none() {
            warn!(%cid, "answer reply has no result");
        }
        debug!(%cid, "answer received");
        Ok(reply)
    }
}
