//! Async submit methods for ChatSession.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::reply::{ErrorBanner, APOLOGY_REPLY};
use crate::reveal::reveal;
use crate::{AnswerClient, AnswerRequest, ChatError};

use super::manager::ChatSession;
use super::types::{SessionContext, SubmitGuard, SubmitOutcome};

impl ChatSession {
    /// Run one question/answer exchange.
    ///
    /// Blank input is ignored. Otherwise the user message is appended at
    /// once, one request is sent, and exactly one bot message follows: the
    /// answer (revealed through `on_chunk` first) or the fixed apology. Remote
    /// failures never surface as `Err`; only a concurrent submit does.
    ///
    /// The draft is cleared as soon as the question is taken, so a cancelled
    /// submit leaves neither the draft nor the submitting flag behind.
    pub async fn submit<F>(
        &self,
        ctx: &SessionContext,
        client: &dyn AnswerClient,
        text: &str,
        on_chunk: F,
    ) -> Result<SubmitOutcome, ChatError>
    where
        F: Fn(String) + Send + Sync,
    {
        let question = text.trim();
        if question.is_empty() {
            debug!("ignoring blank submission");
            return Ok(SubmitOutcome::Ignored);
        }

        let _guard = SubmitGuard::acquire(&self.submitting)?;

        {
            let mut state = self.state.lock().await;
            state.banner = None;
            state.draft.clear();
            state.log.push_user(question, Utc::now());
        }

        let prompt = self.prompt.build(&self.knowledge, question);
        let request = AnswerRequest {
            question,
            prompt: &prompt,
            session_id: ctx.session_id(),
        };

        let outcome = match client.ask(&request).await {
            Ok(reply) => {
                let text = reply.into_text();
                let created_at = Utc::now();
                reveal(&text, self.reveal, &on_chunk).await;

                let mut state = self.state.lock().await;
                let reply = state.log.push_bot(text, created_at).clone();
                info!(messages = state.log.len(), "answer appended");
                SubmitOutcome::Answered { reply }
            }
            Err(err) => {
                let banner = ErrorBanner::classify(&err.to_string());
                warn!(error = %err, ?banner, "answer request failed");

                let mut state = self.state.lock().await;
                state.banner = Some(banner);
                let reply = state.log.push_bot(APOLOGY_REPLY, Utc::now()).clone();
                SubmitOutcome::Failed { banner, reply }
            }
        };

        Ok(outcome)
    }

    /// Submit the current draft, as pressing "send" does.
    pub async fn submit_draft<F>(
        &self,
        ctx: &SessionContext,
        client: &dyn AnswerClient,
        on_chunk: F,
    ) -> Result<SubmitOutcome, ChatError>
    where
        F: Fn(String) + Send + Sync,
    {
        let draft = self.draft().await;
        self.submit(ctx, client, &draft, on_chunk).await
    }
}
