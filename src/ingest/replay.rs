//! Stack-machine replay of the open/close event stream.
//!
//! The stack is an explicit owned `Vec`, never recursion, so trace
//! depth is bounded only by available memory and not by the host call
//! stack.

use crate::profile::{EventKind, FrameTable, ProfileEvent};
use crate::utils::error::IngestError;
use log::debug;

/// A closed call interval
///
/// **Public** - the builder's input. One per matched open/close pair;
/// transient, produced and consumed within a single construction call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Index into the frame table
    pub frame: usize,

    /// Timestamp of the open event
    pub start: f64,

    /// Timestamp of the close event
    pub end: f64,

    /// Number of enclosing frames still open (root = 0)
    pub depth: u32,
}

impl Interval {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// A frame sitting on the open stack
struct OpenFrame {
    frame: usize,
    opened_at: f64,
}

/// Replay the event stream into closed intervals
///
/// **Public** - main entry point for ingestion
///
/// # Arguments
/// * `events` - chronologically ordered open/close stream
/// * `frames` - frame table the events index into
///
/// # Returns
/// One interval per matched pair, in close order (a post-order
/// traversal of the implicit call tree).
///
/// # Errors
/// * `IngestError::UnknownFrame` - event indexes past the frame table
/// * `IngestError::UnexpectedClose` - close with nothing open
/// * `IngestError::MismatchedClose` - close does not match the top of the stack
/// * `IngestError::UnclosedFrames` - opens left unmatched at stream end
pub fn build_intervals(
    events: &[ProfileEvent],
    frames: &FrameTable,
) -> Result<Vec<Interval>, IngestError> {
    let mut stack: Vec<OpenFrame> = Vec::new();
    let mut intervals: Vec<Interval> = Vec::with_capacity(events.len() / 2);

    for event in events {
        if event.frame >= frames.len() {
            return Err(IngestError::UnknownFrame {
                index: event.frame,
                at: event.at,
            });
        }

        match event.kind {
            EventKind::Open => {
                stack.push(OpenFrame {
                    frame: event.frame,
                    opened_at: event.at,
                });
            }
            EventKind::Close => {
                let open = stack.pop().ok_or(IngestError::UnexpectedClose {
                    frame: event.frame,
                    at: event.at,
                })?;
                if open.frame != event.frame {
                    return Err(IngestError::MismatchedClose {
                        expected: open.frame,
                        found: event.frame,
                        at: event.at,
                    });
                }
                intervals.push(Interval {
                    frame: open.frame,
                    start: open.opened_at,
                    end: event.at,
                    depth: stack.len() as u32,
                });
            }
        }
    }

    if !stack.is_empty() {
        return Err(IngestError::UnclosedFrames { count: stack.len() });
    }

    debug!(
        "Replayed {} events into {} intervals",
        events.len(),
        intervals.len()
    );

    Ok(intervals)
}
