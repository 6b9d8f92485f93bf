//! Frame loop observer trait for progress reporting and frame capture.

use ba_behavior::FrameBuffer;
use ba_core::Frame;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_frame_end(&mut self, frame: Frame, time: f64, buffer: &FrameBuffer) {
///         if frame.0 % self.interval == 0 {
///             println!("{frame} @ {time:.2}s: {} lit", buffer.lit_cells());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before `update`.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called after `render`, every `config.output_interval_frames` frames.
    ///
    /// `time` is the behavior's simulation clock after this frame's update.
    fn on_frame_end(&mut self, _frame: Frame, _time: f64, _buffer: &FrameBuffer) {}

    /// Called once after the final frame completes.
    fn on_sim_end(&mut self, _final_frame: Frame) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
