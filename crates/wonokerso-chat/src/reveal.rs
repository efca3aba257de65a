//! Character-by-character reveal of bot answers.
//!
//! Purely cosmetic: the full answer is already in hand, and is only added
//! to the conversation once the reveal has finished.

use std::time::Duration;

/// Default per-character delay of the typing effect.
pub const DEFAULT_CHAR_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSettings {
    pub enabled: bool,
    pub char_delay: Duration,
}

impl RevealSettings {
    pub fn new(char_delay: Duration) -> Self {
        Self {
            enabled: true,
            char_delay,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            char_delay: Duration::ZERO,
        }
    }
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_DELAY)
    }
}

/// Feed `text` to `on_chunk` one character at a time, sleeping
/// `char_delay` after each. A zero delay emits the text as one chunk;
/// a disabled reveal emits nothing.
pub async fn reveal<F>(text: &str, settings: RevealSettings, on_chunk: &F)
where
    F: Fn(String) + ?Sized,
{
    if !settings.enabled || text.is_empty() {
        return;
    }
    if settings.char_delay.is_zero() {
        on_chunk(text.to_string());
        return;
    }
    for ch in text.chars() {
        on_chunk(ch.to_string());
        tokio::time::sleep(settings.char_delay).await;
    }
}
