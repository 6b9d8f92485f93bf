//! `ba-output`: frame dumps for the babel_array frame loop.
//!
//! | Backend | Files created                                |
//! |---------|----------------------------------------------|
//! | CSV     | `frame_cells.csv`, `frame_summaries.csv`     |
//!
//! Backends implement [`FrameWriter`] and are driven by
//! [`FrameOutputObserver`], which implements `ba_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ba_output::{CsvWriter, FrameOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = FrameOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FrameOutputObserver;
pub use row::{CellRow, FrameSummaryRow};
pub use writer::FrameWriter;
