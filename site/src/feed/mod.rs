//! Feed module
//!
//! HTML rendering of feed items and the pages that carry them.

pub mod page;
pub mod renderer;

pub use page::{detail_page, list_page};
