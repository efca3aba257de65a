//! Fixed user-facing replies and the error banner.

use std::fmt;

/// Bot reply when the endpoint answers without a usable `result`.
pub const FALLBACK_REPLY: &str = "Maaf, tidak ada respons dari AI.";

/// Bot reply appended after any failed exchange.
pub const APOLOGY_REPLY: &str = "Maaf, terjadi kesalahan. Coba lagi.";

/// Transient error shown above the conversation until the next submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorBanner {
    NotFound,
    Cors,
    Generic,
}

impl ErrorBanner {
    /// Classify a failure by the text of its error message.
    pub fn classify(message: &str) -> Self {
        if message.contains("404") {
            ErrorBanner::NotFound
        } else if message.contains("CORS") {
            ErrorBanner::Cors
        } else {
            ErrorBanner::Generic
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            ErrorBanner::NotFound => "API endpoint not found. Please check the API configuration.",
            ErrorBanner::Cors => "CORS error: API does not allow direct browser requests.",
            ErrorBanner::Generic => "Terjadi kesalahan saat menghubungi API.",
        }
    }
}

impl fmt::Display for ErrorBanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
