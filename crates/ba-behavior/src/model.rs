//! The `Behavior` trait, the main extension point for animations.

use ba_core::ParamSet;

use crate::{BehaviorState, OutputSink};

/// Pluggable animation strategy.
///
/// Implement this trait to define what the array shows.  The caller's frame
/// loop alternates [`update`][Self::update] and [`render`][Self::render];
/// the two are never called concurrently on one instance.
///
/// # Contract
///
/// - `update` must call [`BehaviorState::advance`] on its state first, then
///   apply its own transitions.  It may be called indefinitely.
/// - `render` must not change behavior state (it takes `&self`) and must
///   write the whole frame, because sinks keep the previous frame's values.
///
/// # Example
///
/// ```rust,ignore
/// struct Strobe { state: BehaviorState, pos: GridPos }
///
/// impl Behavior for Strobe {
///     fn name(&self) -> &'static str { "strobe" }
///     fn state(&self) -> &BehaviorState { &self.state }
///     fn update(&mut self, elapsed: f64) { self.state.advance(elapsed) }
///     fn render(&self, sink: &mut dyn OutputSink) {
///         sink.zero_brightness();
///         sink.zero_volume();
///         let on = (self.time() * 2.0).fract() < 0.5;
///         sink.set_brightness(self.pos, if on { 1.0 } else { 0.0 });
///     }
/// }
/// ```
pub trait Behavior: Send + 'static {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn state(&self) -> &BehaviorState;

    /// Advance by `elapsed` seconds (non-negative).
    fn update(&mut self, elapsed: f64);

    /// Write the current frame through `sink`.
    fn render(&self, sink: &mut dyn OutputSink);

    /// Accumulated simulation time in seconds.
    fn time(&self) -> f64 {
        self.state().time()
    }

    fn params(&self) -> &ParamSet {
        self.state().params()
    }
}

impl<B: Behavior + ?Sized> Behavior for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn state(&self) -> &BehaviorState {
        (**self).state()
    }

    fn update(&mut self, elapsed: f64) {
        (**self).update(elapsed)
    }

    fn render(&self, sink: &mut dyn OutputSink) {
        (**self).render(sink)
    }
}
