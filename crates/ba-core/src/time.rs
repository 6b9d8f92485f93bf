//! Time model.
//!
//! # Two time sources
//!
//! Behaviors see two independent clocks:
//!
//! - [`SimClock`] accumulates the elapsed seconds handed to `update`.  It is
//!   what animations render against, so a paused or fast-forwarded frame loop
//!   changes how the animation looks.
//! - [`WallClock`] reports real elapsed seconds.  Behaviors that re-decide
//!   things "every N seconds" read it so their cadence follows the room, not
//!   the frame loop.  It is a trait so tests can drive it by hand
//!   ([`ManualClock`]).
//!
//! The frame loop itself counts [`Frame`]s; [`SimConfig`] maps frames to
//! simulated seconds.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Accumulated simulation time in seconds.
///
/// Monotonically non-decreasing: [`advance`][Self::advance] ignores negative
/// and non-finite increments.  Never reset.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    elapsed_secs: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed` seconds.
    #[inline]
    pub fn advance(&mut self, elapsed: f64) {
        debug_assert!(elapsed >= 0.0, "negative elapsed time {elapsed}");
        if elapsed.is_finite() && elapsed > 0.0 {
            self.elapsed_secs += elapsed;
        }
    }

    /// Seconds accumulated so far.
    #[inline]
    pub fn secs(&self) -> f64 {
        self.elapsed_secs
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.elapsed_secs)
    }
}

// ── WallClock ─────────────────────────────────────────────────────────────────

/// A source of real elapsed time, in seconds since an arbitrary origin.
///
/// Only differences between two readings are meaningful.
pub trait WallClock: Send + 'static {
    fn now_secs(&self) -> f64;
}

/// Monotonic system clock measured from its own creation.
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock for SystemClock {
    #[inline]
    fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// A hand-driven clock.
///
/// Clones share the same reading, so a test (or a fast-forwarding frame
/// loop) can keep one handle and give another to a behavior.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    /// A clock reading `secs`.
    pub fn starting_at(secs: f64) -> Self {
        Self { bits: Arc::new(AtomicU64::new(secs.to_bits())) }
    }

    /// Set the reading to `secs`.
    pub fn set(&self, secs: f64) {
        self.bits.store(secs.to_bits(), Ordering::Relaxed);
    }

    /// Move the reading forward by `secs`.
    pub fn advance(&self, secs: f64) {
        self.set(self.now_secs() + secs);
    }
}

impl WallClock for ManualClock {
    #[inline]
    fn now_secs(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

// ── Frame ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter for the frame loop.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Return the frame `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Frame {
        Frame(self.0 + n)
    }

    #[inline]
    pub fn next(self) -> Frame {
        self.offset(1)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Frame loop configuration.
///
/// Typically built by the application crate (or deserialized with the
/// `serde` feature) and handed to the frame loop builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated seconds per frame, passed to every `update`.  Must be > 0.
    pub frame_secs: f64,

    /// Total frames to run.
    pub total_frames: u64,

    /// Seed for the behavior's shuffled scan order
    /// (`ScanOrder::shuffled(config.seed)`).  Two runs with the same seed
    /// and wall-clock readings render the same frames.
    pub seed: u64,

    /// Report a rendered frame to the observer every N frames.  1 = every
    /// frame; 0 disables frame reports.
    pub output_interval_frames: u64,
}

impl SimConfig {
    /// A config at `fps` frames per second.
    pub fn at_fps(fps: f64, total_frames: u64) -> Self {
        Self {
            frame_secs: 1.0 / fps,
            total_frames,
            seed: 0,
            output_interval_frames: 1,
        }
    }

    /// The frame at which the loop stops (exclusive upper bound).
    #[inline]
    pub fn end_frame(&self) -> Frame {
        Frame(self.total_frames)
    }

    /// Simulated seconds covered by the whole run.
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        self.total_frames as f64 * self.frame_secs
    }
}
