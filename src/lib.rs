//! Flamewright
//!
//! Flamegraph construction engine for evented performance profiles.
//!
//! Turns a flat, chronologically ordered stream of call open/close
//! events into a hierarchical, renderable interval structure under one
//! of three layout policies (call order, left heavy, alphabetical),
//! with support for inversion and cross-profile timeline alignment.
//!
//! Pipeline: JSON document -> [`parser`] -> (`Profile`, `FrameTable`)
//! -> [`ingest`] -> intervals -> [`flamegraph::Flamegraph::build`]
//! -> renderable node list. Rendering itself is a downstream concern;
//! this crate stops at geometry.

pub mod flamegraph;
pub mod ingest;
pub mod parser;
pub mod profile;
pub mod utils;
