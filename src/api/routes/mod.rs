//! HTTP route handlers.

pub mod debug;
pub mod health;
pub mod news;
pub mod tools;
