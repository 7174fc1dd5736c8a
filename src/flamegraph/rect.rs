//! Axis-aligned bounding rectangle for the config space.

use crate::utils::config::PLACEHOLDER_EXTENT;

/// The coordinate domain (time x depth) a flamegraph's nodes occupy
///
/// Consumed by a renderer to compute a screen-space transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Fixed non-degenerate domain used before any real data loads
    pub fn placeholder() -> Self {
        Self::new(0.0, 0.0, PLACEHOLDER_EXTENT, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_extent() {
        let rect = Rect::placeholder();
        assert_eq!(rect, Rect::new(0.0, 0.0, 1_000_000.0, 0.0));
    }
}
