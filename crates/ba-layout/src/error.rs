//! Layout error type.

use thiserror::Error;

use ba_core::{GridPos, UnitId};

/// Errors produced while building a layout.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("{second} is placed at {pos}, already occupied by {first}")]
    DuplicatePosition { pos: GridPos, first: UnitId, second: UnitId },

    #[error("layout has no units")]
    Empty,
}

pub type LayoutResult<T> = Result<T, LayoutError>;
