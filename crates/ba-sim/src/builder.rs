//! Fluent builder for constructing a [`Sim`].

use ba_behavior::{Behavior, FrameBuffer};
use ba_core::{Frame, SimConfig};
use ba_layout::GridLayout;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: frame duration, total frames, output interval
/// - `B: Behavior`: the behavior to drive
/// - array dimensions, via `.layout(&l)` or `.dimensions(w, h)`
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, behavior)
///     .layout(&layout)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: Behavior> {
    config:     SimConfig,
    behavior:   B,
    dimensions: Option<(u32, u32)>,
}

impl<B: Behavior> SimBuilder<B> {
    pub fn new(config: SimConfig, behavior: B) -> Self {
        Self { config, behavior, dimensions: None }
    }

    /// Size the frame buffer to the layout's bounding box.
    pub fn layout(self, layout: &GridLayout) -> Self {
        self.dimensions(layout.width(), layout.height())
    }

    /// Size the frame buffer explicitly.
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = Some((width, height));
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<B>> {
        let frame_secs = self.config.frame_secs;
        if !(frame_secs.is_finite() && frame_secs > 0.0) {
            return Err(SimError::Config(format!(
                "frame_secs must be a positive number of seconds, got {frame_secs}"
            )));
        }

        let (width, height) = match self.dimensions {
            Some((w, h)) if w > 0 && h > 0 => (w, h),
            Some((w, h)) => {
                return Err(SimError::Config(format!("array dimensions {w}x{h} have no cells")));
            }
            None => return Err(SimError::Config("array dimensions not set".into())),
        };

        Ok(Sim {
            config:        self.config,
            current_frame: Frame::ZERO,
            behavior:      self.behavior,
            buffer:        FrameBuffer::new(width, height),
        })
    }
}
