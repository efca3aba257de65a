//! Plain-text rendering of the conversation for the terminal.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use wonokerso_chat::{format_relative, ErrorBanner, Message};
use wonokerso_config::schema::DisplayConfig;

pub struct Renderer<'a> {
    display: &'a DisplayConfig,
}

impl<'a> Renderer<'a> {
    pub fn new(display: &'a DisplayConfig) -> Self {
        Self { display }
    }

    /// Title line with the running message count, e.g. `Chat with ... (4)`.
    pub fn header(&self, count: usize) -> String {
        format!("{} ({count})", self.display.title)
    }

    pub fn author(&self, is_bot: bool) -> &str {
        if is_bot {
            &self.display.bot_name
        } else {
            &self.display.user_name
        }
    }

    pub fn banner(&self, banner: ErrorBanner) -> String {
        format!("! {banner}")
    }

    /// `<author> · <relative time>` line above a message body.
    pub fn heading<Tz>(&self, is_bot: bool, created_at: &DateTime<Tz>, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        format!(
            "{} · {}",
            self.author(is_bot),
            format_relative(created_at, now)
        )
    }

    pub fn message<Tz>(&self, message: &Message, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let created_at = message.created_at().with_timezone(&now.timezone());
        let mut out = self.heading(message.is_bot(), &created_at, now);
        for line in message.content().lines() {
            out.push_str("\n  ");
            out.push_str(line);
        }
        out
    }

    /// The whole conversation, or the empty-state text.
    pub fn history<Tz>(&self, messages: &[Message], now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if messages.is_empty() {
            return self.display.empty_text.clone();
        }
        messages
            .iter()
            .map(|m| self.message(m, now))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
