//! Output sinks: where rendered brightness and volume go.
//!
//! A sink accepts per-cell writes on two independent scalar channels.  Writes
//! are fire-and-forget; a sink silently drops writes to cells that hold no
//! unit, which lets behaviors draw halos across the array edge.

use ba_core::GridPos;

/// Receives one rendered frame.
///
/// Values are expected in `[0, 1]`.  Passing anything else is a caller bug;
/// sinks only check it in debug builds.
pub trait OutputSink {
    /// Set brightness to 0 everywhere.
    fn zero_brightness(&mut self);

    /// Set volume to 0 everywhere.
    fn zero_volume(&mut self);

    fn set_brightness(&mut self, pos: GridPos, value: f64);

    fn set_volume(&mut self, pos: GridPos, value: f64);
}

// ── FrameBuffer ───────────────────────────────────────────────────────────────

/// Dense in-memory frame for a `width × height` array.
///
/// Stands in for the hardware: the frame loop renders into it and observers
/// read it back.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    width:      u32,
    height:     u32,
    brightness: Vec<f64>,
    volume:     Vec<f64>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let cells = width as usize * height as usize;
        Self {
            width,
            height,
            brightness: vec![0.0; cells],
            volume:     vec![0.0; cells],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flat index of `pos`, or `None` if it is off the array.
    #[inline]
    fn index(&self, pos: GridPos) -> Option<usize> {
        let in_bounds = pos.x >= 0
            && pos.y >= 0
            && (pos.x as u32) < self.width
            && (pos.y as u32) < self.height;
        in_bounds.then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    pub fn brightness_at(&self, pos: GridPos) -> Option<f64> {
        self.index(pos).map(|i| self.brightness[i])
    }

    pub fn volume_at(&self, pos: GridPos) -> Option<f64> {
        self.index(pos).map(|i| self.volume[i])
    }

    /// Iterate `(pos, brightness, volume)` row-major.
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, f64, f64)> + '_ {
        let width = self.width as usize;
        self.brightness
            .iter()
            .zip(&self.volume)
            .enumerate()
            .map(move |(i, (&b, &v))| {
                let pos = GridPos::new((i % width) as i32, (i / width) as i32);
                (pos, b, v)
            })
    }

    /// Number of cells with non-zero brightness.
    pub fn lit_cells(&self) -> usize {
        self.brightness.iter().filter(|&&b| b > 0.0).count()
    }

    /// Number of cells with non-zero volume.
    pub fn voiced_cells(&self) -> usize {
        self.volume.iter().filter(|&&v| v > 0.0).count()
    }
}

impl OutputSink for FrameBuffer {
    fn zero_brightness(&mut self) {
        self.brightness.fill(0.0);
    }

    fn zero_volume(&mut self) {
        self.volume.fill(0.0);
    }

    fn set_brightness(&mut self, pos: GridPos, value: f64) {
        debug_assert!((0.0..=1.0).contains(&value), "brightness {value} out of range");
        if let Some(i) = self.index(pos) {
            self.brightness[i] = value;
        }
    }

    fn set_volume(&mut self, pos: GridPos, value: f64) {
        debug_assert!((0.0..=1.0).contains(&value), "volume {value} out of range");
        if let Some(i) = self.index(pos) {
            self.volume[i] = value;
        }
    }
}

// ── RecordingSink ─────────────────────────────────────────────────────────────

/// One call received by a [`RecordingSink`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SinkWrite {
    ZeroBrightness,
    ZeroVolume,
    Brightness(GridPos, f64),
    Volume(GridPos, f64),
}

/// A sink that records every call in order, with no bounds.
///
/// Useful for asserting exactly what a behavior emitted, including writes a
/// real array would drop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSink {
    pub writes: Vec<SinkWrite>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded calls.
    pub fn take(&mut self) -> Vec<SinkWrite> {
        std::mem::take(&mut self.writes)
    }
}

impl OutputSink for RecordingSink {
    fn zero_brightness(&mut self) {
        self.writes.push(SinkWrite::ZeroBrightness);
    }

    fn zero_volume(&mut self) {
        self.writes.push(SinkWrite::ZeroVolume);
    }

    fn set_brightness(&mut self, pos: GridPos, value: f64) {
        self.writes.push(SinkWrite::Brightness(pos, value));
    }

    fn set_volume(&mut self, pos: GridPos, value: f64) {
        self.writes.push(SinkWrite::Volume(pos, value));
    }
}
