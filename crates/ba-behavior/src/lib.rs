//! `ba-behavior`: pluggable animation behaviors for the unit array.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`sink`]     | `OutputSink` trait, `FrameBuffer`, `RecordingSink`             |
//! | [`state`]    | `BehaviorState`: parameter set + simulation clock             |
//! | [`model`]    | `Behavior` trait                                               |
//! | [`selector`] | `find_distant_unit`, `select_distant_units`, `ScanOrder`       |
//! | [`musical`]  | `MusicalBehavior`, `MusicalBuilder`, `breathing`               |
//! | [`blank`]    | `BlankBehavior`: renders an all-zero frame                    |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                           |
//!
//! # Design notes
//!
//! Every behavior follows the same two-call cycle, driven by the caller's
//! frame loop:
//!
//! 1. **`update(elapsed)`** advances the behavior's simulation clock by
//!    `elapsed` seconds, then applies whatever state transitions the behavior
//!    layers on top (e.g. picking new units to highlight).
//! 2. **`render(sink)`** writes the current frame through an [`OutputSink`].
//!    It takes `&self`, so rendering can never change behavior state and may
//!    be repeated any number of times between updates.
//!
//! Shared runtime state lives in a composed [`BehaviorState`] rather than a
//! base type.

pub mod blank;
pub mod error;
pub mod model;
pub mod musical;
pub mod selector;
pub mod sink;
pub mod state;

#[cfg(test)]
mod tests;

pub use blank::BlankBehavior;
pub use error::{BehaviorError, BehaviorResult};
pub use model::Behavior;
pub use musical::{MusicalBehavior, MusicalBuilder, MusicalParams, breathing};
pub use selector::{ScanOrder, find_distant_unit, select_distant_units};
pub use sink::{FrameBuffer, OutputSink, RecordingSink, SinkWrite};
pub use state::BehaviorState;
