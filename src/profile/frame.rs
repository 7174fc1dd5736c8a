//! Frame identity records and the arena that owns them.
//!
//! Every unique call-site identity gets exactly one `Frame`, stored in a
//! `FrameTable` and addressed everywhere else by integer index. Nodes never
//! hold frame references directly, so frame sharing costs nothing.

/// A single call-site identity
///
/// **Public** - shared by every node representing an occurrence of this frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Index of this frame in the owning table
    pub key: usize,

    /// Function or symbol name
    pub name: String,

    /// Source file, if debug info was available
    pub file: Option<String>,

    /// Source line, if debug info was available
    pub line: Option<u32>,

    /// Cumulative self+child weight over all occurrences, accumulated
    /// by the loader with a recursion guard
    pub total_weight: f64,
}

/// Arena of immutable frame records
///
/// Mutable only while a loader builds it; the construction pipeline
/// treats it as read-only.
#[derive(Debug, Clone, Default)]
pub struct FrameTable {
    frames: Vec<Frame>,
}

impl FrameTable {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Append a frame, assigning its key
    ///
    /// # Returns
    /// The index (== `Frame::key`) of the new frame
    pub fn push(&mut self, name: impl Into<String>, file: Option<String>, line: Option<u32>) -> usize {
        let key = self.frames.len();
        self.frames.push(Frame {
            key,
            name: name.into(),
            file,
            line,
            total_weight: 0.0,
        });
        key
    }

    /// Add to a frame's cumulative weight (loader-time only)
    pub fn add_weight(&mut self, index: usize, delta: f64) {
        if let Some(frame) = self.frames.get_mut(index) {
            frame.total_weight += delta;
        }
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Frame name lookup with a fallback for out-of-range indices
    pub fn name(&self, index: usize) -> &str {
        self.frames.get(index).map(|f| f.name.as_str()).unwrap_or("unknown")
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }
}
