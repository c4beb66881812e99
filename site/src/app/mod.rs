//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and rendering.

pub mod feed_service;
pub mod normalize;

pub use feed_service::{FeedService, PageTargets, RenderedPage};
