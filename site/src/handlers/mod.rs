//! HTTP handlers
//!
//! Axum request handlers for the site endpoints.

pub mod news;

pub use news::{list_news, list_news_json, news_detail};
