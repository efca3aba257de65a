//! Session types and the submitting guard.

use std::sync::atomic::{AtomicBool, Ordering};

use wonokerso_common::SessionId;

use crate::message::Message;
use crate::reply::ErrorBanner;
use crate::ChatError;

/// Per-session request context, passed explicitly into every submit.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    session_id: SessionId,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(session_id: SessionId) -> Self {
        Self { session_id }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }
}

/// What a submit did to the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing appended, nothing sent.
    Ignored,
    /// The endpoint answered; `reply` is the appended bot message.
    Answered { reply: Message },
    /// The exchange failed; the apology was appended and the banner raised.
    Failed { banner: ErrorBanner, reply: Message },
}

impl SubmitOutcome {
    pub fn reply(&self) -> Option<&Message> {
        match self {
            SubmitOutcome::Ignored => None,
            SubmitOutcome::Answered { reply } | SubmitOutcome::Failed { reply, .. } => Some(reply),
        }
    }
}

/// Guard that clears the submitting flag on drop, so it is released even
/// if the submit future is cancelled mid-request.
pub(crate) struct SubmitGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SubmitGuard<'a> {
    /// Attempt to mark the session as submitting. Fails if already set.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, ChatError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(ChatError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
