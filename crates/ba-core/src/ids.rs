//! Strongly typed unit identifier.
//!
//! `UnitId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! without ceremony.  The inner integer is `pub` for direct indexing into
//! dense per-unit arrays, but callers should prefer [`UnitId::index`].

use std::fmt;

/// Index of one physical unit (a light + speaker pair) in the array.
///
/// Stable for the lifetime of the array.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl UnitId {
    /// Sentinel meaning "no valid unit".
    pub const INVALID: UnitId = UnitId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for UnitId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitId({})", self.0)
    }
}

impl From<UnitId> for usize {
    #[inline(always)]
    fn from(id: UnitId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for UnitId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<UnitId, Self::Error> {
        u32::try_from(n).map(UnitId)
    }
}
