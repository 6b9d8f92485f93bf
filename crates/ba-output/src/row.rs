//! Plain data row types written by output backends.

/// One non-dark cell of a rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRow {
    pub frame:      u64,
    pub time_secs:  f64,
    pub x:          i32,
    pub y:          i32,
    pub brightness: f64,
    pub volume:     f64,
}

/// Summary statistics for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummaryRow {
    pub frame:        u64,
    pub time_secs:    f64,
    pub lit_cells:    u64,
    pub voiced_cells: u64,
}
