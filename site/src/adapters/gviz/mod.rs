//! Google Sheets gviz adapter
//!
//! Loads a sheet tab through the visualization query endpoint.

mod client;

pub use client::GvizClient;
