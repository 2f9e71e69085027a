//! Structured error types for gridview.
//!
//! Every failure here is a programming-contract violation surfaced
//! immediately; the core never retries.

/// All errors that can occur while windowing a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A cell was positioned before it was ever measured. The expansion or
    /// placement ordering is broken in the calling pass.
    #[error("cell ({row}, {column}) positioned before first measurement")]
    MissingMeasurement {
        /// Row index of the offending cell.
        row: u32,
        /// Column index of the offending cell.
        column: u32,
    },

    /// An adapter position has no (row, column) mapping in this table.
    #[error("adapter position {0} has no cell in the table")]
    InvalidPosition(u64),

    /// Adapter rows disagree on the column count. Detected at adapter
    /// construction, before any layout runs.
    #[error("table declares {expected} columns; rows with other counts: {rows:?}")]
    InconsistentRowWidth {
        /// Column count declared by the first row.
        expected: usize,
        /// `(row index, actual column count)` for each offending row.
        rows: Vec<(usize, usize)>,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
