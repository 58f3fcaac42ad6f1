//! The HTTP news source against a local upstream.

mod common;

use std::time::Duration;

use toolscope::services::{HttpNewsSource, NewsSource};

use common::{Upstream, http_feed, news_config, spawn_upstream};

#[tokio::test]
async fn test_fetch_cleans_and_filters_upstream_feed() {
    let upstream = Upstream::default();
    let base = spawn_upstream(upstream.clone()).await;
    let feed = http_feed(format!("{base}/feed"), None);

    let snapshot = feed.refresh().await;

    assert!(snapshot.error.is_none());
    let titles: Vec<_> = snapshot.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Hi there", "Open weights & open data"]);
    assert_eq!(snapshot.items[0].summary, "A & B");
    assert_eq!(snapshot.items[0].source, "Wire");
    assert_eq!(snapshot.items[0].source_url, "https://wire.example/1");
    assert_eq!(upstream.hits(), 1);
}

#[tokio::test]
async fn test_api_key_is_sent_when_configured() {
    let upstream = Upstream::default();
    let base = spawn_upstream(upstream.clone()).await;

    http_feed(format!("{base}/feed"), Some("secret")).refresh().await;
    http_feed(format!("{base}/feed"), None).refresh().await;

    assert_eq!(upstream.hits(), 2);
    assert_eq!(upstream.keyed_hits(), 1);
}

#[tokio::test]
async fn test_non_array_response_is_empty_list() {
    let base = spawn_upstream(Upstream::default()).await;
    let feed = http_feed(format!("{base}/object"), None);

    let snapshot = feed.refresh().await;
    assert!(snapshot.items.is_empty());
    assert!(snapshot.error.is_none());
}

#[tokio::test]
async fn test_error_status_sets_banner() {
    let base = spawn_upstream(Upstream::default()).await;
    let source = HttpNewsSource::new(&news_config(format!("{base}/broken")), None).unwrap();

    let err = source.fetch().await.unwrap_err();
    assert!(err.to_string().contains("503"));

    let snapshot = http_feed(format!("{base}/broken"), None).refresh().await;
    assert!(snapshot.error.unwrap().contains("503"));
}

#[tokio::test]
async fn test_undecodable_body_sets_banner() {
    let base = spawn_upstream(Upstream::default()).await;
    let snapshot = http_feed(format!("{base}/garbage"), None).refresh().await;

    assert!(snapshot.items.is_empty());
    assert!(snapshot.error.is_some());
}

#[tokio::test]
async fn test_unreachable_upstream_sets_banner() {
    // Nothing listens on the discard port locally.
    let snapshot = http_feed("http://127.0.0.1:9/feed".to_string(), None)
        .refresh()
        .await;

    assert!(snapshot.error.is_some());
    assert!(snapshot.last_updated.is_none());
    assert!(snapshot.last_attempt.is_some());
}

#[tokio::test]
async fn test_poller_populates_feed_on_start() {
    let upstream = Upstream::default();
    let base = spawn_upstream(upstream.clone()).await;
    let feed = http_feed(format!("{base}/feed"), None);

    let poller = feed.spawn_poller(Duration::from_secs(1800));
    tokio::time::sleep(Duration::from_millis(300)).await;
    poller.shutdown().await;

    assert_eq!(feed.snapshot().await.items.len(), 2);
    assert_eq!(upstream.hits(), 1);
}
