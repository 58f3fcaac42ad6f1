//! Diagnostic environment summary.
//!
//! Reports whether the news API key is configured without revealing it.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::NEWS_API_KEY_VAR;

/// Environment variable naming the deployment environment.
pub const ENVIRONMENT_VAR: &str = "TOOLSCOPE_ENV";

/// `GET /api/debug-env` response.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnvReport {
    pub environment: String,
    pub has_news_api_key: bool,
    pub news_api_key_length: usize,
    pub timestamp: DateTime<Utc>,
}

impl EnvReport {
    /// Build the report from an environment lookup.
    pub fn collect<F>(lookup: F, now: DateTime<Utc>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = lookup(NEWS_API_KEY_VAR).filter(|k| !k.is_empty());

        Self {
            environment: lookup(ENVIRONMENT_VAR)
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| "development".to_string()),
            has_news_api_key: key.is_some(),
            news_api_key_length: key.map_or(0, |k| k.chars().count()),
            timestamp: now,
        }
    }
}

/// `GET /api/debug-env`
pub async fn debug_env() -> Json<EnvReport> {
    Json(EnvReport::collect(|k| std::env::var(k).ok(), Utc::now()))
}
