//! Entry points for CLI operations.
//!
//! - `run_server`: Serve the API and poll the news feed
//! - `run_fetch`: Fetch and clean the feed once
//! - `run_tools`: List catalog entries with their stars
//! - `run_validate`: Check configuration and catalog

pub mod fetch;
pub mod serve;
pub mod tools;
pub mod validate;

pub use fetch::run_fetch;
pub use serve::{build_feed, run_server};
pub use tools::run_tools;
pub use validate::run_validate;
