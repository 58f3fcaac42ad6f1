//! HTTP surface: router, shared state and handlers.
//!
//! - [`app`]: router and middleware
//! - [`state`]: state shared across handlers
//! - [`routes`]: handlers for health, news, tools and diagnostics

pub mod app;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::AppState;
