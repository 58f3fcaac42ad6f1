#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use toolscope::api::{AppState, create_app};
use toolscope::models::{CatalogConfig, CleaningConfig, NewsConfig};
use toolscope::services::{Catalog, HttpNewsSource, NewsFeed, NewsProcessor};

pub const CATALOG: &str = r#"
[[tools]]
name = "ChatGPT"
rating = 4.7
category = "Assistants"
price = "$20/mo"
url = "https://chat.example/"

[[tools]]
name = "Pixel Forge"
rating = 4.5
category = "Image"
price = "Free"

[[tools]]
name = "Draft Bot"
rating = 3.2
category = "Writing"
price = "$9"
url = "https://draft.example/start?plan=pro"
"#;

/// Feed body with markup, entities and a too-short title.
pub fn feed_body() -> Value {
    json!([
        {
            "id": "1",
            "title": "<b>Hi</b> there",
            "summary": "A &amp; B",
            "publishedAt": "2026-10-14T09:30:00Z",
            "category": "tools",
            "source": {"name": "Wire", "url": "https://wire.example"},
            "sourceUrl": "https://wire.example/1"
        },
        {"id": "2", "title": "Hi", "summary": "too short"},
        {"id": "3", "title": "Open weights &amp; open data", "category": "models"}
    ])
}

/// Upstream stand-in. Counts hits and records whether an API key was sent.
#[derive(Clone, Default)]
pub struct Upstream {
    pub hits: Arc<AtomicUsize>,
    pub keyed_hits: Arc<AtomicUsize>,
}

impl Upstream {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn keyed_hits(&self) -> usize {
        self.keyed_hits.load(Ordering::SeqCst)
    }
}

/// Start the upstream stand-in and return its base URL.
pub async fn spawn_upstream(upstream: Upstream) -> String {
    let feed_counter = upstream.clone();
    let app = Router::new()
        .route(
            "/feed",
            get(move |headers: HeaderMap| {
                let counter = feed_counter.clone();
                async move {
                    counter.hits.fetch_add(1, Ordering::SeqCst);
                    if headers.contains_key("x-api-key") {
                        counter.keyed_hits.fetch_add(1, Ordering::SeqCst);
                    }
                    axum::Json(feed_body())
                }
            }),
        )
        .route("/object", get(|| async { axum::Json(json!({"articles": []})) }))
        .route(
            "/broken",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down").into_response() }),
        )
        .route("/garbage", get(|| async { "<html>not json</html>" }));

    serve(app).await
}

/// Serve a router on an ephemeral local port.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn news_config(endpoint: String) -> NewsConfig {
    NewsConfig {
        endpoint,
        timeout_secs: 5,
        ..NewsConfig::default()
    }
}

pub fn http_feed(endpoint: String, api_key: Option<&str>) -> Arc<NewsFeed> {
    let config = news_config(endpoint);
    let source = HttpNewsSource::new(&config, api_key.map(String::from)).unwrap();
    let processor = NewsProcessor::new(&config, &CleaningConfig::default()).unwrap();
    Arc::new(NewsFeed::new(Arc::new(source), processor))
}

pub fn app_state(feed: Arc<NewsFeed>, affiliate_tag: Option<&str>) -> AppState {
    let catalog = Catalog::from_toml(CATALOG).unwrap();
    let catalog_config = CatalogConfig {
        affiliate_tag: affiliate_tag.map(String::from),
        ..CatalogConfig::default()
    };
    AppState::new(feed, catalog, catalog_config)
}

/// Start the full application and return its base URL.
pub async fn spawn_app(state: AppState) -> String {
    serve(create_app(state)).await
}

/// Client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
