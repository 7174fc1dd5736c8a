//! Constants shared across the construction pipeline.

/// Width of the placeholder config space handed to renderers before any
/// real data exists. Non-degenerate so a scale transform is always
/// computable.
pub const PLACEHOLDER_EXTENT: f64 = 1_000_000.0;

/// Durations at or above this many milliseconds display in seconds
pub const SECONDS_THRESHOLD_MS: f64 = 1_000.0;

/// Default unit assumed when an imported document omits the field
pub const DEFAULT_UNIT: &str = "milliseconds";
