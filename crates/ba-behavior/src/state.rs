//! Runtime state shared by every behavior.

use ba_core::{ParamSet, SimClock};

/// The parameter set and simulation clock every behavior carries.
///
/// Behaviors embed one and forward their `update` to
/// [`advance`][Self::advance] before doing anything else.  Advancing the
/// clock is the only mutation this type performs; the parameter set is
/// read-only after construction.
#[derive(Clone, Debug)]
pub struct BehaviorState {
    params:  ParamSet,
    clock:   SimClock,
    updates: u64,
}

impl BehaviorState {
    pub fn new(params: ParamSet) -> Self {
        Self { params, clock: SimClock::new(), updates: 0 }
    }

    /// Add `elapsed` seconds to the simulation clock.
    #[inline]
    pub fn advance(&mut self, elapsed: f64) {
        self.clock.advance(elapsed);
        self.updates += 1;
    }

    /// Accumulated simulation time in seconds.
    #[inline]
    pub fn time(&self) -> f64 {
        self.clock.secs()
    }

    #[inline]
    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    /// `true` once the first update has run.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.updates > 0
    }

    /// Number of updates applied so far.
    #[inline]
    pub fn updates(&self) -> u64 {
        self.updates
    }
}
