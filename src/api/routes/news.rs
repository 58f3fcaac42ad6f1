//! News feed endpoints.
//!
//! - `GET /api/ai-news` - cleaned items currently on display
//! - `GET /api/ai-news/status` - error banner, timestamps and countdown
//! - `POST /api/ai-news/refresh` - manual refresh through the poller's path

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::state::AppState;
use crate::models::{FeedSnapshot, NewsItem};

/// Feed status for the widget chrome.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedStatus {
    pub item_count: usize,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
    pub last_attempt: Option<DateTime<Utc>>,
    pub next_refresh_at: Option<DateTime<Utc>>,
    /// Seconds until the next automatic refresh, for the countdown
    pub next_refresh_in_secs: Option<i64>,
    pub refreshing: bool,
    pub revision: u64,
}

impl FeedStatus {
    pub fn from_snapshot(snapshot: &FeedSnapshot, refreshing: bool, now: DateTime<Utc>) -> Self {
        Self {
            item_count: snapshot.items.len(),
            error: snapshot.error.clone(),
            last_updated: snapshot.last_updated,
            last_attempt: snapshot.last_attempt,
            next_refresh_at: snapshot.next_refresh_at,
            next_refresh_in_secs: snapshot
                .next_refresh_at
                .map(|at| (at - now).num_seconds().max(0)),
            refreshing,
            revision: snapshot.revision,
        }
    }
}

/// `GET /api/ai-news`
pub async fn get_news(State(state): State<AppState>) -> Json<Vec<NewsItem>> {
    Json(state.feed.snapshot().await.items)
}

/// `GET /api/ai-news/status`
pub async fn get_status(State(state): State<AppState>) -> Json<FeedStatus> {
    let snapshot = state.feed.snapshot().await;
    Json(FeedStatus::from_snapshot(
        &snapshot,
        state.feed.is_refreshing(),
        Utc::now(),
    ))
}

/// `POST /api/ai-news/refresh`
///
/// Failures are reported in the returned status, not as an HTTP error.
pub async fn post_refresh(State(state): State<AppState>) -> Json<FeedStatus> {
    log::info!("Manual news refresh requested");
    let snapshot = state.feed.refresh().await;
    Json(FeedStatus::from_snapshot(
        &snapshot,
        state.feed.is_refreshing(),
        Utc::now(),
    ))
}
