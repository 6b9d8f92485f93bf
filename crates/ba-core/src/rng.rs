//! Seeded RNG for scan-order shuffling.
//!
//! A behavior that visits its pool in random order owns one `SelectRng`.
//! The stream is never reseeded, so a given seed replays the same sequence
//! of shuffles across runs.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Seeded RNG used to randomize candidate scan order.
#[derive(Clone, Debug)]
pub struct SelectRng(SmallRng);

impl SelectRng {
    pub fn new(seed: u64) -> Self {
        SelectRng(SmallRng::seed_from_u64(seed))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }
}
