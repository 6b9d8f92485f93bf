//! Unit positions on the grid.
//!
//! # Data layout
//!
//! `GridLayout` stores one `GridPos` per unit, indexed by `UnitId`, plus an
//! inverse `GridPos → UnitId` map so sinks and renderers can ask "which unit
//! is here?".  Arrays are small (tens to hundreds of units), so a hash map is
//! the whole spatial index.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use ba_core::{GridPos, UnitId};

use crate::{LayoutError, LayoutResult};

// ── Layout trait ──────────────────────────────────────────────────────────────

/// Maps a unit to its grid position.
///
/// Pure and deterministic.  Returns `None` for indices the layout does not
/// know; behaviors validate their candidate units against the layout when
/// they are built.
pub trait Layout: Send + Sync + 'static {
    fn position_of(&self, unit: UnitId) -> Option<GridPos>;
}

impl<L: Layout + ?Sized> Layout for Arc<L> {
    #[inline]
    fn position_of(&self, unit: UnitId) -> Option<GridPos> {
        (**self).position_of(unit)
    }
}

impl<L: Layout + ?Sized> Layout for Box<L> {
    #[inline]
    fn position_of(&self, unit: UnitId) -> Option<GridPos> {
        (**self).position_of(unit)
    }
}

// ── GridLayout ────────────────────────────────────────────────────────────────

/// A fixed array of units placed on integer grid cells.
///
/// Do not construct directly; use [`GridLayout::rectangle`] or
/// [`GridLayoutBuilder`].
#[derive(Clone, Debug)]
pub struct GridLayout {
    /// Position of each unit.  Indexed by `UnitId`.
    positions: Vec<GridPos>,
    /// Inverse of `positions`.
    by_pos: FxHashMap<GridPos, UnitId>,
    /// One past the largest occupied `x`.
    width: u32,
    /// One past the largest occupied `y`.
    height: u32,
}

impl GridLayout {
    /// A fully populated `width × height` rectangle, numbered row-major:
    /// `UnitId(i)` sits at `(i % width, i / width)`.
    pub fn rectangle(width: u32, height: u32) -> LayoutResult<Self> {
        let mut builder = GridLayoutBuilder::new();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                builder.add_unit(GridPos::new(x, y));
            }
        }
        builder.build()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Width of the bounding box anchored at the origin.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the bounding box anchored at the origin.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The unit occupying `pos`, if any.
    #[inline]
    pub fn unit_at(&self, pos: GridPos) -> Option<UnitId> {
        self.by_pos.get(&pos).copied()
    }

    /// Iterate every unit in index order.
    pub fn units(&self) -> impl Iterator<Item = (UnitId, GridPos)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &pos)| (UnitId(i as u32), pos))
    }
}

impl Layout for GridLayout {
    #[inline]
    fn position_of(&self, unit: UnitId) -> Option<GridPos> {
        self.positions.get(unit.index()).copied()
    }
}

// ── GridLayoutBuilder ─────────────────────────────────────────────────────────

/// Incremental builder for irregular layouts.
///
/// ```rust,ignore
/// let mut b = GridLayoutBuilder::new();
/// let a = b.add_unit(GridPos::new(0, 0));
/// let c = b.add_unit(GridPos::new(10, 0));
/// let layout = b.build()?;
/// ```
#[derive(Default)]
pub struct GridLayoutBuilder {
    positions: Vec<GridPos>,
}

impl GridLayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a unit at `pos` and return its ID.
    pub fn add_unit(&mut self, pos: GridPos) -> UnitId {
        let id = UnitId(self.positions.len() as u32);
        self.positions.push(pos);
        id
    }

    /// Validate and freeze.  Two units on the same cell is an error.
    pub fn build(self) -> LayoutResult<GridLayout> {
        if self.positions.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut by_pos = FxHashMap::default();
        by_pos.reserve(self.positions.len());
        for (i, &pos) in self.positions.iter().enumerate() {
            let unit = UnitId(i as u32);
            if let Some(&first) = by_pos.get(&pos) {
                return Err(LayoutError::DuplicatePosition { pos, first, second: unit });
            }
            by_pos.insert(pos, unit);
        }

        let width = self.positions.iter().map(|p| p.x + 1).max().unwrap_or(0).max(0) as u32;
        let height = self.positions.iter().map(|p| p.y + 1).max().unwrap_or(0).max(0) as u32;

        Ok(GridLayout { positions: self.positions, by_pos, width, height })
    }
}
