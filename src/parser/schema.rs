//! serde schema for the evented-profile JSON interchange document.
//!
//! This is the wire shape only; validation and conversion into the
//! internal model live in `evented.rs`.

use crate::profile::EventKind;
use crate::utils::config::DEFAULT_UNIT;
use serde::Deserialize;

/// Top-level profile document
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileDocument {
    /// Display name of the profile
    #[serde(default)]
    pub name: String,

    /// Unit the timestamps are expressed in
    #[serde(default = "default_unit")]
    pub unit: String,

    /// "flamechart" or "flamegraph"; anything else is rejected
    #[serde(rename = "type")]
    pub profile_type: String,

    /// Timeline start, in the profile's unit
    #[serde(default, rename = "startValue")]
    pub start_value: f64,

    /// Timeline end; falls back to the last event timestamp when absent
    #[serde(default, rename = "endValue")]
    pub end_value: f64,

    /// Frame table, indexed by the events' `frame` field
    pub frames: Vec<FrameEntry>,

    /// Chronologically ordered open/close stream
    pub events: Vec<EventEntry>,
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

/// One frame table entry
#[derive(Debug, Clone, Deserialize)]
pub struct FrameEntry {
    pub name: String,

    /// Source file, if debug symbols were available
    #[serde(default)]
    pub file: Option<String>,

    #[serde(default)]
    pub line: Option<u32>,
}

/// Event kind on the wire: long names or speedscope-style short aliases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EventKindEntry {
    #[serde(rename = "open", alias = "O")]
    Open,
    #[serde(rename = "close", alias = "C")]
    Close,
}

impl From<EventKindEntry> for EventKind {
    fn from(kind: EventKindEntry) -> Self {
        match kind {
            EventKindEntry::Open => EventKind::Open,
            EventKindEntry::Close => EventKind::Close,
        }
    }
}

/// One call event
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EventEntry {
    #[serde(rename = "type", alias = "kind")]
    pub kind: EventKindEntry,

    /// Timestamp, in the profile's unit
    pub at: f64,

    /// Index into `frames`
    pub frame: usize,
}
