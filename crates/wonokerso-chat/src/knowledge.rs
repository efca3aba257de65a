//! Static key/fact snippets used to ground prompts.
//!
//! The knowledge base is read once when a session starts, from a JSON
//! document shaped `{ "<key>": "<fact>", ... }`. Document order is kept,
//! since it is the order facts appear in the prompt.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to fetch knowledge: {0}")]
    Fetch(String),
    #[error("knowledge request failed with status {0}")]
    Status(u16),
    #[error("invalid knowledge JSON: {0}")]
    Parse(String),
    #[error("knowledge document must be a JSON object")]
    NotAnObject,
}

/// Where a knowledge document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeSource {
    File(PathBuf),
    Url(String),
}

impl KnowledgeSource {
    /// `http://` and `https://` sources are fetched, anything else is a path.
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            KnowledgeSource::Url(source.to_string())
        } else {
            KnowledgeSource::File(PathBuf::from(source))
        }
    }
}

impl std::fmt::Display for KnowledgeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KnowledgeSource::File(path) => write!(f, "{}", path.display()),
            KnowledgeSource::Url(url) => f.write_str(url),
        }
    }
}

/// Ordered, read-only key → fact mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<(String, String)>,
}

impl KnowledgeBase {
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Built-in facts used when the configured document is unavailable.
    pub fn fallback() -> Self {
        Self::new([
            ("Information1", "desa wonokerso adalah desa di pakisaji"),
            (
                "Information2",
                "desa wonokerso adalah desa yang memiliki 3 sd dan 4 tk",
            ),
        ])
    }

    /// Parse a `{ key: fact }` document. Numbers and booleans are kept as
    /// their JSON text; nulls, arrays and nested objects are skipped.
    pub fn from_json_str(json: &str) -> Result<Self, KnowledgeError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| KnowledgeError::Parse(e.to_string()))?;
        let serde_json::Value::Object(map) = value else {
            return Err(KnowledgeError::NotAnObject);
        };

        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            match value {
                serde_json::Value::String(fact) => entries.push((key, fact)),
                serde_json::Value::Number(n) => entries.push((key, n.to_string())),
                serde_json::Value::Bool(b) => entries.push((key, b.to_string())),
                other => warn!(%key, kind = json_kind(&other), "skipping knowledge entry"),
            }
        }
        Ok(Self { entries })
    }

    pub async fn from_file(path: &Path) -> Result<Self, KnowledgeError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| KnowledgeError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_str(&content)
    }

    pub async fn from_url(http: &reqwest::Client, url: &str) -> Result<Self, KnowledgeError> {
        let response = http
            .get(url)
            .send()
            .await
            .map_err(|e| KnowledgeError::Fetch(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(KnowledgeError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| KnowledgeError::Fetch(e.without_url().to_string()))?;
        Self::from_json_str(&body)
    }

    pub async fn load(
        source: &KnowledgeSource,
        http: &reqwest::Client,
    ) -> Result<Self, KnowledgeError> {
        match source {
            KnowledgeSource::File(path) => Self::from_file(path).await,
            KnowledgeSource::Url(url) => Self::from_url(http, url).await,
        }
    }

    /// Load `source`, falling back to the built-in facts on any failure.
    pub async fn load_or_fallback(source: &KnowledgeSource, http: &reqwest::Client) -> Self {
        match Self::load(source, http).await {
            Ok(kb) => {
                info!(%source, facts = kb.len(), "knowledge loaded");
                kb
            }
            Err(e) => {
                warn!(%source, error = %e, "knowledge unavailable, using built-in facts");
                Self::fallback()
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
