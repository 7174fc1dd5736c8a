//! Evented-profile import: JSON document to (Profile, FrameTable).
//!
//! This module handles:
//! - The serde schema of the interchange document
//! - Validation of units, profile type, and frame indices
//! - Per-frame cumulative weight accumulation

pub mod evented;
pub mod schema;

// Re-export main types
pub use evented::{parse_file, parse_str, parse_value};
pub use schema::{EventEntry, EventKindEntry, FrameEntry, ProfileDocument};
