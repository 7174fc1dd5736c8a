//! Flamegraph construction: layout policies, geometry, formatting.
//!
//! This module converts closed call intervals into the final ordered
//! node list a renderer draws. It owns:
//! - The three layout policies (call order, left heavy, alphabetical)
//! - The `Flamegraph` value object with its factories and mutators
//! - The `Rect` bounding space and the duration formatter

pub mod builder;
pub mod formatter;
pub mod rect;

// Re-export main types
pub use builder::{FlameNode, Flamegraph, FlamegraphConfig, FlamegraphSort};
pub use formatter::DurationFormatter;
pub use rect::Rect;
