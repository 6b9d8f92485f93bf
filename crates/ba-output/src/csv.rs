//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `frame_cells.csv`
//! - `frame_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::FrameWriter;
use crate::{CellRow, FrameSummaryRow, OutputResult};

/// Writes rendered frames to two CSV files.
pub struct CsvWriter {
    cells:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut cells = Writer::from_path(dir.join("frame_cells.csv"))?;
        cells.write_record(["frame", "time_secs", "x", "y", "brightness", "volume"])?;

        let mut summaries = Writer::from_path(dir.join("frame_summaries.csv"))?;
        summaries.write_record(["frame", "time_secs", "lit_cells", "voiced_cells"])?;

        Ok(Self { cells, summaries, finished: false })
    }
}

impl FrameWriter for CsvWriter {
    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()> {
        for row in rows {
            self.cells.write_record(&[
                row.frame.to_string(),
                format!("{:.4}", row.time_secs),
                row.x.to_string(),
                row.y.to_string(),
                format!("{:.4}", row.brightness),
                format!("{:.4}", row.volume),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.frame.to_string(),
            format!("{:.4}", row.time_secs),
            row.lit_cells.to_string(),
            row.voiced_cells.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.cells.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
