//! `ba-core`: foundational types for the `babel_array` behavior engine.
//!
//! This crate is a dependency of every other `ba-*` crate.  It has no `ba-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`ids`]    | `UnitId`                                                    |
//! | [`geo`]    | `GridPos`, Euclidean distance, axis neighbours              |
//! | [`time`]   | `SimClock`, `WallClock`, `SystemClock`, `ManualClock`, `Frame`, `SimConfig` |
//! | [`rng`]    | `SelectRng` (seeded scan-order shuffling)                   |
//! | [`params`] | `ParamSet`, named numeric behavior parameters              |
//! | [`error`]  | `CoreError`, `CoreResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public value types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GridPos;
pub use ids::UnitId;
pub use params::ParamSet;
pub use rng::SelectRng;
pub use time::{Frame, ManualClock, SimClock, SimConfig, SystemClock, WallClock};
