//! Trace ingestion: event stream to closed call intervals.
//!
//! Replays a profile's ordered open/close stream through an explicit
//! stack machine and yields one closed interval per matched pair.
//! Unbalanced nesting is a fatal error.

pub mod replay;

// Re-export main types and functions
pub use replay::{build_intervals, Interval};
