//! Axum application builder.
//!
//! Configures routes, middleware, and state for the server.

use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::routes::{debug, health, news, tools};
use crate::api::state::AppState;

/// Create the Axum application with all routes.
pub fn create_app(state: AppState) -> Router {
    // The site front end is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health::health))
        // News feed
        .route("/api/ai-news", get(news::get_news))
        .route("/api/ai-news/status", get(news::get_status))
        .route("/api/ai-news/refresh", post(news::post_refresh))
        // Diagnostics
        .route("/api/debug-env", get(debug::debug_env))
        // Catalog
        .route("/api/tools", get(tools::list_tools))
        .route("/api/tools/{slug}", get(tools::get_tool))
        .route("/go/{slug}", get(tools::go))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
