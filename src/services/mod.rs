//! Service layer for the application.
//!
//! This module contains the business logic for:
//! - Fetching and cleaning the upstream feed (`NewsSource`, `NewsProcessor`)
//! - Holding and refreshing the displayed feed (`NewsFeed`)
//! - Querying reviewed tools (`Catalog`)

mod catalog;
mod feed;
mod news;

pub use catalog::{Catalog, SortKey, affiliate_url, sort_tools};
pub use feed::{NewsFeed, PollerHandle};
pub use news::{HttpNewsSource, NEWS_API_KEY_VAR, NewsProcessor, NewsSource};
