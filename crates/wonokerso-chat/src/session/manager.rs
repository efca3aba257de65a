//! Session struct, construction, and read access.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;

use crate::knowledge::KnowledgeBase;
use crate::message::{Message, MessageLog};
use crate::prompt::PromptBuilder;
use crate::reply::ErrorBanner;
use crate::reveal::RevealSettings;

/// Mutable conversation state. Locked only between awaits.
#[derive(Debug, Default)]
pub(super) struct ChatState {
    pub(super) log: MessageLog,
    pub(super) draft: String,
    pub(super) banner: Option<ErrorBanner>,
}

/// A chat conversation grounded on a fixed knowledge base.
pub struct ChatSession {
    pub(super) state: Mutex<ChatState>,
    /// Facts injected into every prompt. Read-only after construction.
    pub(super) knowledge: KnowledgeBase,
    pub(super) prompt: PromptBuilder,
    pub(super) reveal: RevealSettings,
    /// Set while an exchange (request and reveal) is in flight.
    pub(super) submitting: AtomicBool,
}

/// Point-in-time copy of everything a front end renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSnapshot {
    pub messages: Vec<Message>,
    pub draft: String,
    pub banner: Option<ErrorBanner>,
    pub submitting: bool,
}

impl ChatSession {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self {
            state: Mutex::new(ChatState::default()),
            knowledge,
            prompt: PromptBuilder::default(),
            reveal: RevealSettings::default(),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn with_prompt(mut self, prompt: PromptBuilder) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn with_reveal(mut self, reveal: RevealSettings) -> Self {
        self.reveal = reveal;
        self
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn reveal_settings(&self) -> RevealSettings {
        self.reveal
    }

    /// Whether an exchange is in flight. Front ends disable input meanwhile.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Replace the pending input text.
    pub async fn set_draft(&self, text: impl Into<String>) {
        self.state.lock().await.draft = text.into();
    }

    pub async fn draft(&self) -> String {
        self.state.lock().await.draft.clone()
    }

    /// Get the full conversation history.
    pub async fn messages(&self) -> Vec<Message> {
        self.state.lock().await.log.as_slice().to_vec()
    }

    pub async fn message_count(&self) -> usize {
        self.state.lock().await.log.len()
    }

    pub async fn error_banner(&self) -> Option<ErrorBanner> {
        self.state.lock().await.banner
    }

    /// Hide the error banner without submitting.
    pub async fn dismiss_error(&self) {
        self.state.lock().await.banner = None;
    }

    pub async fn snapshot(&self) -> ChatSnapshot {
        let state = self.state.lock().await;
        ChatSnapshot {
            messages: state.log.as_slice().to_vec(),
            draft: state.draft.clone(),
            banner: state.banner,
            submitting: self.is_submitting(),
        }
    }
}
