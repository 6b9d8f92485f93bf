//! Greedy selection of units that keep a minimum distance from each other.
//!
//! Selection is one slot at a time: [`find_distant_unit`] returns a single
//! candidate that is far enough from everything accepted so far, or `None`
//! if no candidate qualifies.  `None` is an expected outcome, not an error;
//! callers skip the slot and carry on, so a selection can come back shorter
//! than requested (even empty).
//!
//! # Scan order
//!
//! Which candidate wins depends on the order the pool is scanned in, chosen
//! explicitly with [`ScanOrder`]:
//!
//! - `InOrder` scans the pool as given, so identical inputs always select
//!   identical units.
//! - `Shuffled` reshuffles the pool with a seeded [`SelectRng`] on every
//!   call.  Successive selections differ, but a given seed reproduces the
//!   same sequence of selections.
//!
//! Cost is O(pool × accepted) per call.  Pools are tens of units, so there
//! is no spatial index.

use ba_core::{GridPos, SelectRng, UnitId};
use ba_layout::Layout;
use tracing::trace;

/// How [`find_distant_unit`] walks the candidate pool.
#[derive(Clone, Debug)]
pub enum ScanOrder {
    /// Pool order, first qualifying candidate wins.
    InOrder,
    /// Fresh seeded shuffle of the pool on every call.
    Shuffled(SelectRng),
}

impl ScanOrder {
    pub fn shuffled(seed: u64) -> Self {
        ScanOrder::Shuffled(SelectRng::new(seed))
    }

    /// The pool in the order it should be scanned.
    fn arrange(&mut self, pool: &[UnitId]) -> Vec<UnitId> {
        let mut scan = pool.to_vec();
        if let ScanOrder::Shuffled(rng) = self {
            rng.shuffle(&mut scan);
        }
        scan
    }
}

impl Default for ScanOrder {
    fn default() -> Self {
        ScanOrder::shuffled(0)
    }
}

/// Find one unit in `pool` at least `min_distance` from every unit in
/// `accepted`.
///
/// Units already in `accepted` are never returned again.  Positions come from
/// `layout` on every call; a candidate (or accepted unit) without a position
/// is skipped.
pub fn find_distant_unit<L: Layout + ?Sized>(
    pool:         &[UnitId],
    accepted:     &[UnitId],
    min_distance: f64,
    layout:       &L,
    order:        &mut ScanOrder,
) -> Option<UnitId> {
    let taken: Vec<GridPos> = accepted
        .iter()
        .filter_map(|&unit| layout.position_of(unit))
        .collect();

    order.arrange(pool).into_iter().find(|candidate| {
        if accepted.contains(candidate) {
            return false;
        }
        let Some(pos) = layout.position_of(*candidate) else {
            return false;
        };
        taken.iter().all(|&other| pos.distance(other) >= min_distance)
    })
}

/// Fill up to `count` slots by calling [`find_distant_unit`] against the
/// growing accepted set.
///
/// The first pick is unconstrained, so a non-empty pool always yields at
/// least one unit.  A slot with no qualifying candidate leaves the accepted
/// set unchanged, so every later slot would fail too; selection stops there
/// and the remaining slots are skipped.  At most `pool.len()` slots are ever
/// tried.
pub fn select_distant_units<L: Layout + ?Sized>(
    pool:         &[UnitId],
    count:        usize,
    min_distance: f64,
    layout:       &L,
    order:        &mut ScanOrder,
) -> Vec<UnitId> {
    let slots = count.min(pool.len());
    let mut accepted = Vec::with_capacity(slots);
    for slot in 0..slots {
        match find_distant_unit(pool, &accepted, min_distance, layout, order) {
            Some(unit) => accepted.push(unit),
            None => {
                trace!(
                    slot,
                    skipped = count - slot,
                    min_distance,
                    "no unit far enough away; skipping remaining slots"
                );
                break;
            }
        }
    }
    accepted
}
