//! The `Sim` struct and its frame loop.

use ba_behavior::{Behavior, FrameBuffer};
use ba_core::{Frame, SimConfig};
use tracing::info;

use crate::{SimObserver, SimResult};

/// The frame loop runner.
///
/// Owns one behavior and the frame buffer it renders into.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: Behavior> {
    /// Frame duration, total frames, output interval.
    pub config: SimConfig,

    /// The next frame to run.
    pub current_frame: Frame,

    /// The behavior being driven.
    pub behavior: B,

    /// The most recently rendered frame.
    pub buffer: FrameBuffer,
}

impl<B: Behavior> Sim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current frame to `config.end_frame()`.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_frame();
        info!(
            behavior = self.behavior.name(),
            from     = self.current_frame.0,
            to       = end.0,
            "frame loop started"
        );

        while self.current_frame < end {
            self.step(observer);
        }

        observer.on_sim_end(self.current_frame);
        info!(
            behavior = self.behavior.name(),
            frames   = self.current_frame.0,
            sim_secs = self.behavior.time(),
            "frame loop finished"
        );
        Ok(())
    }

    /// Run exactly `n` frames from the current position (ignores
    /// `end_frame`).  Does not call `on_sim_end`.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_frames<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer);
        }
        Ok(())
    }

    /// Simulation time of the behavior, in seconds.
    pub fn time(&self) -> f64 {
        self.behavior.time()
    }

    // ── Core frame processing ─────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.current_frame;
        observer.on_frame_start(now);

        self.behavior.update(self.config.frame_secs);
        self.behavior.render(&mut self.buffer);

        let interval = self.config.output_interval_frames;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_frame_end(now, self.behavior.time(), &self.buffer);
        }

        self.current_frame = now.next();
    }
}
