//! The immutable profile input: event stream, units, and profile kind.

use std::fmt;

/// Unit the profile's timestamps and weights are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    /// Unitless weight (allocation counts, event tallies)
    Count,
}

impl ProfileUnit {
    /// Parse a unit string, accepting canonical names and short aliases
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "nanoseconds" | "ns" => Some(Self::Nanoseconds),
            "microseconds" | "us" | "µs" => Some(Self::Microseconds),
            "milliseconds" | "ms" => Some(Self::Milliseconds),
            "seconds" | "s" => Some(Self::Seconds),
            "count" => Some(Self::Count),
            _ => None,
        }
    }
}

impl fmt::Display for ProfileUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nanoseconds => "nanoseconds",
            Self::Microseconds => "microseconds",
            Self::Milliseconds => "milliseconds",
            Self::Seconds => "seconds",
            Self::Count => "count",
        };
        write!(f, "{}", name)
    }
}

/// What the event timestamps mean, and therefore which layouts apply
///
/// A flamechart preserves literal wall-clock occurrence positions; a
/// flamegraph has already merged identical call paths, so each interval
/// width encodes cumulative weight rather than a real time position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileType {
    Flamechart,
    Flamegraph,
}

impl ProfileType {
    /// Parse the exact wire strings
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "flamechart" => Some(Self::Flamechart),
            "flamegraph" => Some(Self::Flamegraph),
            _ => None,
        }
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Flamechart => "flamechart",
            Self::Flamegraph => "flamegraph",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Open,
    Close,
}

/// One call open/close event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileEvent {
    pub kind: EventKind,

    /// Timestamp in the profile's unit
    pub at: f64,

    /// Index into the frame table
    pub frame: usize,
}

/// Immutable profile input, produced by a loader and read-only here
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
    pub unit: ProfileUnit,
    pub start_value: f64,
    pub end_value: f64,
    pub profile_type: ProfileType,

    /// Chronologically ordered open/close stream
    pub events: Vec<ProfileEvent>,
}

impl Profile {
    pub fn duration(&self) -> f64 {
        self.end_value - self.start_value
    }
}
