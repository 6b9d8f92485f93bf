//! The `FrameWriter` trait implemented by all backend writers.

use crate::{CellRow, FrameSummaryRow, OutputResult};

/// Trait implemented by frame output backends.
///
/// Errors are stored by [`FrameOutputObserver`][crate::FrameOutputObserver]
/// and retrieved with its `take_error`.
pub trait FrameWriter {
    /// Write the non-dark cells of one frame.
    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()>;

    /// Write one frame summary row.
    fn write_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
