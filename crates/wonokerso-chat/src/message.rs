//! Chat messages and the append-only conversation log.

use chrono::{DateTime, Utc};

/// One entry in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: String,
    content: String,
    is_bot: bool,
    created_at: DateTime<Utc>,
}

impl Message {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_bot(&self) -> bool {
        self.is_bot
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Hands out ids from the creation time in milliseconds, bumped past the
/// previous id when the clock has not moved.
#[derive(Debug, Default)]
struct MessageIdGen {
    last: Option<i64>,
}

impl MessageIdGen {
    fn next(&mut self, at: DateTime<Utc>) -> String {
        let millis = at.timestamp_millis();
        let id = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(id);
        id.to_string()
    }
}

/// Ordered conversation. Insertion order is display order; entries are
/// never edited or removed.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
    ids: MessageIdGen,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>, at: DateTime<Utc>) -> &Message {
        self.push(content.into(), false, at)
    }

    pub fn push_bot(&mut self, content: impl Into<String>, at: DateTime<Utc>) -> &Message {
        self.push(content.into(), true, at)
    }

    fn push(&mut self, content: String, is_bot: bool, at: DateTime<Utc>) -> &Message {
        let id = self.ids.next(at);
        self.messages.push(Message {
            id,
            content,
            is_bot,
            created_at: at,
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<'a> IntoIterator for &'a MessageLog {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
