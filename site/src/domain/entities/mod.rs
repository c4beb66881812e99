//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod feed_item;

pub use feed_item::FeedItem;
