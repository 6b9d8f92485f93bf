//! `FrameOutputObserver<W>` bridges `SimObserver` to a `FrameWriter`.

use ba_behavior::FrameBuffer;
use ba_core::Frame;
use ba_sim::SimObserver;
use tracing::warn;

use crate::row::{CellRow, FrameSummaryRow};
use crate::writer::FrameWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every reported frame to a [`FrameWriter`]
/// backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct FrameOutputObserver<W: FrameWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: FrameWriter> FrameOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "frame output failed; later errors are dropped");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: FrameWriter> SimObserver for FrameOutputObserver<W> {
    fn on_frame_end(&mut self, frame: Frame, time: f64, buffer: &FrameBuffer) {
        let rows: Vec<CellRow> = buffer
            .cells()
            .filter(|&(_, brightness, volume)| brightness > 0.0 || volume > 0.0)
            .map(|(pos, brightness, volume)| CellRow {
                frame: frame.0,
                time_secs: time,
                x: pos.x,
                y: pos.y,
                brightness,
                volume,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_cells(&rows);
            self.store_err(result);
        }

        let summary = FrameSummaryRow {
            frame:        frame.0,
            time_secs:    time,
            lit_cells:    buffer.lit_cells() as u64,
            voiced_cells: buffer.voiced_cells() as u64,
        };
        let result = self.writer.write_summary(&summary);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_frame: Frame) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
