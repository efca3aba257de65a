//! Conversation session.
//!
//! A `ChatSession` owns the message log, the knowledge base used for
//! grounding, and the transient UI state (draft input, error banner,
//! submitting flag). One submit runs one question/answer exchange.

mod chat;
mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::{ChatSession, ChatSnapshot};
pub use types::{SessionContext, SubmitOutcome};
