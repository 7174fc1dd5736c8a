//! Conversion of a profile document into the internal model.
//!
//! Validates units, profile type, and frame indices, and accumulates
//! per-frame cumulative weight with a recursion guard. Stack balance is
//! NOT enforced here: an unbalanced stream still imports, and ingestion
//! reports the violation when construction runs.

use crate::profile::{EventKind, FrameTable, Profile, ProfileEvent, ProfileType, ProfileUnit};
use crate::utils::error::ImportError;
use log::{debug, warn};
use std::path::Path;

use super::schema::ProfileDocument;

/// Parse a profile document from a JSON string
///
/// **Public** - main entry point for import
///
/// # Errors
/// * `ImportError::Json` - malformed JSON or schema mismatch
/// * `ImportError::UnsupportedProfileType` - not an evented profile
///   ("sampled" and friends land here)
/// * `ImportError::UnknownUnit` - unrecognized unit string
/// * `ImportError::FrameOutOfRange` - event indexes past the frame table
pub fn parse_str(input: &str) -> Result<(Profile, FrameTable), ImportError> {
    let doc: ProfileDocument = serde_json::from_str(input)?;
    convert(doc)
}

/// Parse an already-deserialized JSON value
pub fn parse_value(value: serde_json::Value) -> Result<(Profile, FrameTable), ImportError> {
    let doc: ProfileDocument = serde_json::from_value(value)?;
    convert(doc)
}

/// Read and parse a profile document from disk
pub fn parse_file(path: impl AsRef<Path>) -> Result<(Profile, FrameTable), ImportError> {
    let content = std::fs::read_to_string(path)?;
    parse_str(&content)
}

fn convert(doc: ProfileDocument) -> Result<(Profile, FrameTable), ImportError> {
    let unit =
        ProfileUnit::parse(&doc.unit).ok_or_else(|| ImportError::UnknownUnit(doc.unit.clone()))?;
    let profile_type = ProfileType::parse(&doc.profile_type)
        .ok_or_else(|| ImportError::UnsupportedProfileType(doc.profile_type.clone()))?;

    let mut frames = FrameTable::new();
    for entry in doc.frames {
        frames.push(entry.name, entry.file, entry.line);
    }

    let mut events = Vec::with_capacity(doc.events.len());
    for entry in &doc.events {
        if entry.frame >= frames.len() {
            return Err(ImportError::FrameOutOfRange {
                index: entry.frame,
                frame_count: frames.len(),
            });
        }
        events.push(ProfileEvent {
            kind: entry.kind.into(),
            at: entry.at,
            frame: entry.frame,
        });
    }

    let mut end_value = doc.end_value;
    if end_value <= 0.0 {
        if let Some(last) = events.last() {
            warn!(
                "no endValue in document '{}', falling back to last event timestamp {}",
                doc.name, last.at
            );
            end_value = last.at;
        }
    }

    accumulate_weights(&events, &mut frames);

    debug!(
        "Imported profile '{}': {} frames, {} events",
        doc.name,
        frames.len(),
        events.len()
    );

    Ok((
        Profile {
            name: doc.name,
            unit,
            start_value: doc.start_value,
            end_value,
            profile_type,
            events,
        },
        frames,
    ))
}

/// Accumulate each frame's cumulative weight from matched pairs
///
/// An occurrence nested under a still-open occurrence of the same frame
/// is already covered by the outer span, so it does not double-count.
/// Mismatched or unmatched events are skipped; their weight is simply
/// never credited.
fn accumulate_weights(events: &[ProfileEvent], frames: &mut FrameTable) {
    let mut stack: Vec<(usize, f64)> = Vec::new();

    for event in events {
        match event.kind {
            EventKind::Open => stack.push((event.frame, event.at)),
            EventKind::Close => {
                let Some(&(frame, opened_at)) = stack.last() else {
                    continue;
                };
                if frame != event.frame {
                    continue;
                }
                stack.pop();
                if !stack.iter().any(|&(open, _)| open == frame) {
                    frames.add_weight(frame, event.at - opened_at);
                }
            }
        }
    }
}
