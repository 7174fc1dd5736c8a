//! Core profile data model.
//!
//! This module defines:
//! - The frame arena (`FrameTable`) addressed by integer index
//! - The immutable `Profile` input and its event stream
//! - Unit and profile-type enums shared across the pipeline

pub mod frame;
pub mod trace;

// Re-export main types
pub use frame::{Frame, FrameTable};
pub use trace::{EventKind, Profile, ProfileEvent, ProfileType, ProfileUnit};
