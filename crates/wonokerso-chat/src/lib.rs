//! Chat engine for the Wonokerso village assistant.
//!
//! Provides the conversation core behind the chat widget:
//! - An append-only message log with monotonic ids
//! - A key/fact knowledge base used to ground every prompt
//! - Prompt assembly in the two layouts the widget has used
//! - An HTTP client for the hosted answer endpoint
//! - `ChatSession`, which runs one question/answer exchange per submit
//!   and recovers every remote failure into a bot reply plus a banner

pub mod http;
pub mod knowledge;
pub mod message;
pub mod prompt;
pub mod reply;
pub mod reveal;
pub mod session;
pub mod time_format;

use async_trait::async_trait;
use wonokerso_common::{SessionId, WonokersoError};

pub use http::{AnswerClientConfig, HttpAnswerClient};
pub use knowledge::{KnowledgeBase, KnowledgeError, KnowledgeSource};
pub use message::{Message, MessageLog};
pub use prompt::{PromptBuilder, PromptStyle};
pub use reply::{ErrorBanner, APOLOGY_REPLY, FALLBACK_REPLY};
pub use reveal::RevealSettings;
pub use session::{ChatSession, ChatSnapshot, SessionContext, SubmitOutcome};
pub use time_format::format_relative;

/// A remote service that turns a grounded prompt into an answer.
#[async_trait]
pub trait AnswerClient: Send + Sync {
    async fn ask(&self, request: &AnswerRequest<'_>) -> Result<AnswerReply, ChatError>;
}

/// Everything sent for one question.
#[derive(Debug, Clone, Copy)]
pub struct AnswerRequest<'a> {
    /// The user's question as typed (trimmed).
    pub question: &'a str,
    /// Knowledge preamble + question + instructions.
    pub prompt: &'a str,
    pub session_id: &'a SessionId,
}

/// Decoded `{ "result": string }` reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerReply {
    pub result: Option<String>,
}

impl AnswerReply {
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: Some(result.into()),
        }
    }

    /// Decode a reply body. Only a non-JSON body is an error; a missing,
    /// empty, or non-string `result` decodes to `None`.
    pub fn from_json_str(body: &str) -> Result<Self, ChatError> {
        let json: serde_json::Value =
            serde_json::from_str(body).map_err(|e| ChatError::Parse(e.to_string()))?;
        let result = json
            .get("result")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(String::from);
        Ok(Self { result })
    }

    /// The text to show: the result, or the fixed fallback.
    pub fn into_text(self) -> String {
        self.result.unwrap_or_else(|| FALLBACK_REPLY.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("API request failed with status {0}")]
    Status(u16),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Session is busy with another request")]
    Busy,
}

impl From<ChatError> for WonokersoError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::Network(msg) => WonokersoError::Network(msg),
            other => WonokersoError::Chat(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_with_result() {
        let reply = AnswerReply::from_json_str(r#"{"result":"Desa Wonokerso ada di Pakisaji."}"#)
            .unwrap();
        assert_eq!(reply.into_text(), "Desa Wonokerso ada di Pakisaji.");
    }

    #[test]
    fn reply_without_result_uses_fallback() {
        let reply = AnswerReply::from_json_str(r#"{"status":true}"#).unwrap();
        assert_eq!(reply.result, None);
        assert_eq!(reply.into_text(), FALLBACK_REPLY);
    }

    #[test]
    fn empty_or_non_string_result_uses_fallback() {
        let reply = AnswerReply::from_json_str(r#"{"result":""}"#).unwrap();
        assert_eq!(reply.into_text(), FALLBACK_REPLY);

        let reply = AnswerReply::from_json_str(r#"{"result":42}"#).unwrap();
        assert_eq!(reply.into_text(), FALLBACK_REPLY);
    }

    #[test]
    fn non_json_body_is_parse_error() {
        let err = AnswerReply::from_json_str("<html>gateway</html>").unwrap_err();
        assert!(matches!(err, ChatError::Parse(_)));
    }

    #[test]
    fn status_error_mentions_code() {
        assert_eq!(
            ChatError::Status(404).to_string(),
            "API request failed with status 404"
        );
    }

    #[test]
    fn chat_error_into_wonokerso_error() {
        let err: WonokersoError = ChatError::Network("reset".into()).into();
        assert!(matches!(err, WonokersoError::Network(_)));

        let err: WonokersoError = ChatError::Busy.into();
        assert_eq!(err.to_string(), "chat error: Session is busy with another request");
    }
}
