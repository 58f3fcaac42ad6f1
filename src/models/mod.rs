// src/models/mod.rs

//! Domain models for the service.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod news;
mod rating;
mod tool;

// Re-export all public types
pub use config::{CatalogConfig, CleaningConfig, Config, NewsConfig, Replacement, ServerConfig};
pub use news::{FeedSnapshot, NewsItem, RawNewsItem, RawSource};
pub use rating::{MAX_STARS, StarRating};
pub use tool::ToolRecord;
