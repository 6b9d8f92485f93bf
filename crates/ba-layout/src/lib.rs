//! `ba-layout`: where units are, and which units belong together.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`grid`]    | `Layout` trait, `GridLayout`, `GridLayoutBuilder`            |
//! | [`catalog`] | `UnitCatalog` trait, `StaticCatalog`, `MUSICAL_GROUP`        |
//! | [`error`]   | `LayoutError`, `LayoutResult<T>`                             |
//!
//! Behaviors only see the two traits, so an installation can back them with
//! whatever describes its physical array.

pub mod catalog;
pub mod error;
pub mod grid;

#[cfg(test)]
mod tests;

pub use catalog::{MUSICAL_GROUP, StaticCatalog, UnitCatalog};
pub use error::{LayoutError, LayoutResult};
pub use grid::{GridLayout, GridLayoutBuilder, Layout};
