//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod gviz;

pub use gviz::GvizClient;
