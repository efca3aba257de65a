//! HTTP client for the hosted answer endpoint.
//!
//! Implements the `AnswerClient` trait with a single GET per question:
//! the question, the grounded prompt, and the session id travel as
//! URL-encoded query parameters, and the reply is `{ "result": string }`.

mod api;
mod client;
mod config;

pub use client::HttpAnswerClient;
pub use config::AnswerClientConfig;
