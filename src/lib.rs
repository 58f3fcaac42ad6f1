// src/lib.rs

//! toolscope: news feed and tool catalog service

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
