//! A behavior that keeps the array dark and silent.

use ba_core::ParamSet;

use crate::{Behavior, BehaviorState, OutputSink};

/// A [`Behavior`] that renders an all-zero frame.
///
/// Useful as the idle state between shows and as a placeholder in tests.
#[derive(Clone, Debug)]
pub struct BlankBehavior {
    state: BehaviorState,
}

impl BlankBehavior {
    pub fn new() -> Self {
        Self { state: BehaviorState::new(ParamSet::default()) }
    }
}

impl Default for BlankBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for BlankBehavior {
    fn name(&self) -> &'static str {
        "blank"
    }

    fn state(&self) -> &BehaviorState {
        &self.state
    }

    fn update(&mut self, elapsed: f64) {
        self.state.advance(elapsed);
    }

    fn render(&self, sink: &mut dyn OutputSink) {
        sink.zero_brightness();
        sink.zero_volume();
    }
}
