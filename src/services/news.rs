// src/services/news.rs

//! Upstream news source and the clean-and-filter pass.

use std::collections::HashSet;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{CleaningConfig, NewsConfig, NewsItem, RawNewsItem};
use crate::utils::get_domain;
use crate::utils::http::create_async_client;
use crate::utils::text::{TextCleaner, display_len};

/// Environment variable holding the upstream API key.
pub const NEWS_API_KEY_VAR: &str = "NEWS_API_KEY";

/// Anything that can produce the raw feed body.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch the feed body as JSON. Non-success statuses are errors.
    async fn fetch(&self) -> Result<Value>;

    /// Human-readable origin for log lines.
    fn describe(&self) -> String;
}

/// Feed served over HTTP.
pub struct HttpNewsSource {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpNewsSource {
    /// Create a source for the configured endpoint.
    pub fn new(config: &NewsConfig, api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
            endpoint: config.endpoint.clone(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// Create a source, picking the API key up from `NEWS_API_KEY`.
    pub fn from_env(config: &NewsConfig) -> Result<Self> {
        Self::new(config, std::env::var(NEWS_API_KEY_VAR).ok())
    }
}

#[async_trait]
impl NewsSource for HttpNewsSource {
    async fn fetch(&self) -> Result<Value> {
        let mut request = self.client.get(&self.endpoint);
        if let Some(key) = &self.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream(&self.endpoint, status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// Turns a raw feed body into the displayed list.
#[derive(Debug, Clone)]
pub struct NewsProcessor {
    cleaner: TextCleaner,
    min_title_len: usize,
    max_items: usize,
}

impl NewsProcessor {
    /// Build from the news and cleaning sections of the config.
    pub fn new(news: &NewsConfig, cleaning: &CleaningConfig) -> Result<Self> {
        Ok(Self {
            cleaner: TextCleaner::new(cleaning)?,
            min_title_len: news.min_title_len,
            max_items: news.max_items.max(1),
        })
    }

    /// Clean, filter, de-duplicate and bound the feed.
    ///
    /// A body that is not a JSON array yields an empty list. Records that do
    /// not deserialize are skipped.
    pub fn process(&self, body: Value) -> Vec<NewsItem> {
        let records = match body {
            Value::Array(records) => records,
            other => {
                log::error!(
                    "News feed returned {} instead of an array; showing no items",
                    json_kind(&other)
                );
                return Vec::new();
            }
        };

        let total = records.len();
        let mut seen = HashSet::new();
        let mut items = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            let raw: RawNewsItem = match serde_json::from_value(record) {
                Ok(raw) => raw,
                Err(e) => {
                    log::warn!("Skipping news record {}: {}", index, e);
                    continue;
                }
            };

            let Some(item) = self.clean_item(&raw) else {
                continue;
            };
            if seen.insert(item.id.clone()) {
                items.push(item);
            }
            if items.len() >= self.max_items {
                break;
            }
        }

        log::debug!("Kept {} of {} news records", items.len(), total);
        items
    }

    fn clean_item(&self, raw: &RawNewsItem) -> Option<NewsItem> {
        let title = self.cleaner.clean(raw.title.as_deref().unwrap_or_default());
        if display_len(&title) <= self.min_title_len {
            log::debug!("Dropping news record with short title {:?}", title);
            return None;
        }

        let summary = self
            .cleaner
            .clean(raw.summary_text().unwrap_or_default());
        let source_url = raw.link().unwrap_or_default().trim().to_string();
        let source = raw
            .source_name()
            .map(|name| self.cleaner.clean(name))
            .filter(|name| !name.is_empty())
            .or_else(|| get_domain(&source_url))
            .unwrap_or_default();
        let id = raw
            .id_string()
            .unwrap_or_else(|| NewsItem::derive_id(&source_url, &title));
        let category = raw
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or("general")
            .to_string();

        Some(NewsItem {
            id,
            title,
            summary,
            source,
            source_url,
            published_at: raw.published(),
            category,
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
