//! Error types for the entire crate.
//!
//! We use `thiserror` for library-style errors with custom types, one
//! enum per pipeline stage. All of these are fatal at construction
//! time: there is no partially built flamegraph, callers fall back to
//! `Flamegraph::empty()` or surface the error.

use crate::flamegraph::FlamegraphSort;
use crate::profile::ProfileType;
use thiserror::Error;

/// Errors that can occur while replaying the event stream
///
/// All four are violations of stack discipline or of the frame table's
/// address space; identical malformed input cannot succeed on retry.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("close at {at} for frame {found} does not match open frame {expected}")]
    MismatchedClose { expected: usize, found: usize, at: f64 },

    #[error("close at {at} for frame {frame} with no frame open")]
    UnexpectedClose { frame: usize, at: f64 },

    #[error("{count} frame(s) left open at end of event stream")]
    UnclosedFrames { count: usize },

    #[error("event at {at} references frame {index} outside the frame table")]
    UnknownFrame { index: usize, at: f64 },
}

/// Errors that can occur during flamegraph construction
#[derive(Error, Debug)]
pub enum FlamegraphError {
    #[error("sort '{sort}' is not valid for a '{profile_type}' profile")]
    IncompatibleSort {
        sort: FlamegraphSort,
        profile_type: ProfileType,
    },

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Errors that can occur while importing an evented-profile document
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported profile type: {0}")]
    UnsupportedProfileType(String),

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("event references frame {index} but the table holds {frame_count}")]
    FrameOutOfRange { index: usize, frame_count: usize },
}
