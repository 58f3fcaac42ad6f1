//! News item data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// One record as the upstream feed sends it.
///
/// Every field is optional; the feed has no schema guarantees. Alternate
/// spellings are kept in separate fields so a record carrying more than one
/// of them still deserializes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawNewsItem {
    /// String or numeric identifier
    pub id: Option<Value>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub source: Option<RawSource>,
    pub source_url: Option<String>,
    #[serde(rename = "source_url")]
    pub source_url_snake: Option<String>,
    pub url: Option<String>,
    pub published_at: Option<String>,
    #[serde(rename = "published_at")]
    pub published_at_snake: Option<String>,
    pub category: Option<String>,
}

/// Upstream `source` field: a bare name or a `{ name, url }` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawSource {
    Name(String),
    Detailed {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
}

impl RawNewsItem {
    /// Identifier as a string, if the feed sent a usable one.
    pub fn id_string(&self) -> Option<String> {
        match &self.id {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Source display name.
    pub fn source_name(&self) -> Option<&str> {
        match &self.source {
            Some(RawSource::Name(name)) => Some(name.as_str()),
            Some(RawSource::Detailed { name, .. }) => name.as_deref(),
            None => None,
        }
    }

    /// Summary text, falling back to `description`.
    pub fn summary_text(&self) -> Option<&str> {
        first_present([self.summary.as_deref(), self.description.as_deref()])
    }

    /// Source link: `sourceUrl`, then `source_url`, then `url`, then the
    /// nested source object.
    pub fn link(&self) -> Option<&str> {
        let nested = match &self.source {
            Some(RawSource::Detailed { url, .. }) => url.as_deref(),
            _ => None,
        };
        first_present([
            self.source_url.as_deref(),
            self.source_url_snake.as_deref(),
            self.url.as_deref(),
            nested,
        ])
    }

    /// Publish time, if it parses as RFC 3339.
    pub fn published(&self) -> Option<DateTime<Utc>> {
        first_present([
            self.published_at.as_deref(),
            self.published_at_snake.as_deref(),
        ])
        .and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())
        .map(|dt| dt.with_timezone(&Utc))
    }
}

/// First value that is set and not blank.
fn first_present<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
}

/// A cleaned news item ready for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Source display name
    pub source: String,
    pub source_url: String,
    pub published_at: Option<DateTime<Utc>>,
    pub category: String,
}

impl NewsItem {
    /// Stable identifier for items the feed sent without one.
    pub fn derive_id(source_url: &str, title: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(source_url.as_bytes());
        hasher.update(b"|");
        hasher.update(title.as_bytes());
        let digest = hex::encode(hasher.finalize());
        digest[..16].to_string()
    }
}

/// The shared view-state slot written by every refresh.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    /// Items shown to readers
    pub items: Vec<NewsItem>,
    /// Message for the error banner; cleared by the next successful fetch
    pub error: Option<String>,
    /// Last successful fetch
    pub last_updated: Option<DateTime<Utc>>,
    /// Last fetch attempt, successful or not
    pub last_attempt: Option<DateTime<Utc>>,
    /// When the poller fires next
    pub next_refresh_at: Option<DateTime<Utc>>,
    /// Incremented on every fetch outcome
    pub revision: u64,
}
