//! Liveness check.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
    /// Number of feed refreshes written so far
    pub feed_revision: u64,
    pub tools: usize,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let snapshot = state.feed.snapshot().await;

    Json(HealthResponse {
        status: "healthy",
        uptime_secs: state.uptime_secs(),
        feed_revision: snapshot.revision,
        tools: state.catalog.len(),
    })
}
