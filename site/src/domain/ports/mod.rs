//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod sheet_source;

pub use sheet_source::{
    GvizCell, GvizColumn, GvizResponse, GvizRow, GvizTable, SheetRequest, SheetSource,
};
