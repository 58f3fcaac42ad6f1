// src/services/feed.rs

//! News feed state and its refresh poller.
//!
//! [`NewsFeed`] owns the one view-state slot readers see. Every refresh, from
//! the poller or from a manual request, runs the same path and writes its
//! outcome when the fetch resolves. Refreshes are not queued or de-duplicated,
//! so overlapping fetches resolve in any order and the last one to finish
//! wins.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::AppError;
use crate::models::FeedSnapshot;
use crate::services::news::{NewsProcessor, NewsSource};

/// Shared news feed.
pub struct NewsFeed {
    source: Arc<dyn NewsSource>,
    processor: NewsProcessor,
    state: RwLock<FeedSnapshot>,
    in_flight: AtomicUsize,
}

impl NewsFeed {
    /// Create an empty feed over the given source.
    pub fn new(source: Arc<dyn NewsSource>, processor: NewsProcessor) -> Self {
        Self {
            source,
            processor,
            state: RwLock::new(FeedSnapshot::default()),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Fetch once and write the outcome into the slot.
    ///
    /// On success the items are replaced and the error cleared. On failure
    /// the error banner is set and the previous items stay.
    pub async fn refresh(&self) -> FeedSnapshot {
        let _guard = InFlight::enter(&self.in_flight);

        let outcome = self
            .source
            .fetch()
            .await
            .map(|body| self.processor.process(body));
        let now = Utc::now();

        let mut state = self.state.write().await;
        state.last_attempt = Some(now);
        state.revision += 1;

        match outcome {
            Ok(items) => {
                log::info!(
                    "News refreshed from {}: {} item(s)",
                    self.source.describe(),
                    items.len()
                );
                state.items = items;
                state.error = None;
                state.last_updated = Some(now);
            }
            Err(e) => {
                log::error!("News refresh from {} failed: {}", self.source.describe(), e);
                state.error = Some(banner_message(&e));
            }
        }

        state.clone()
    }

    /// Current slot contents.
    pub async fn snapshot(&self) -> FeedSnapshot {
        self.state.read().await.clone()
    }

    /// Whether any fetch is in flight.
    pub fn is_refreshing(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Start refreshing on a fixed interval. The first refresh runs at once.
    ///
    /// Dropping or shutting down the returned handle stops the poller.
    pub fn spawn_poller(self: &Arc<Self>, every: Duration) -> PollerHandle {
        let feed = Arc::clone(self);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                feed.schedule_next(every).await;
                feed.refresh().await;
            }
        });

        log::info!("News poller started, refreshing every {}s", every.as_secs());
        PollerHandle { task }
    }

    async fn schedule_next(&self, every: Duration) {
        let next = chrono::Duration::from_std(every)
            .ok()
            .and_then(|d| Utc::now().checked_add_signed(d));
        self.state.write().await.next_refresh_at = next;
    }
}

/// Handle to a running poller.
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop the poller and wait until it has stopped.
    ///
    /// A fetch the poller had in flight is dropped with it. Manual refreshes
    /// running elsewhere are unaffected.
    pub async fn shutdown(mut self) {
        self.task.abort();
        if let Err(e) = (&mut self.task).await {
            if !e.is_cancelled() {
                log::error!("News poller ended abnormally: {}", e);
            }
        }
        log::info!("News poller stopped");
    }

    /// Whether the poller task has ended.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Counts a fetch as in flight for the guard's lifetime.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

fn banner_message(error: &AppError) -> String {
    match error {
        AppError::Upstream { status, .. } => {
            format!("Couldn't load the latest AI news (upstream returned {status}).")
        }
        AppError::Json(_) => {
            "Couldn't load the latest AI news (unreadable response).".to_string()
        }
        _ => "Couldn't load the latest AI news. Please try again.".to_string(),
    }
}
