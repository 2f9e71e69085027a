//! Cell coordinates and the adapter-position mapping.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// A single cell of the table, addressed by row and column index.
///
/// Rows are unbounded (they grow as pages arrive); columns are fixed at
/// construction of the data adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Row index, 0-based.
    pub row: u32,
    /// Column index, 0-based, in `[0, column_count)`.
    pub column: u32,
}

impl Cell {
    /// Create a cell at `(row, column)`.
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Linear adapter position of this cell: `row * column_count + column`.
    pub fn to_position(self, column_count: u32) -> u64 {
        u64::from(self.row) * u64::from(column_count) + u64::from(self.column)
    }

    /// Cell addressed by a linear adapter position.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidPosition`] when `column_count` is zero or
    /// the position maps to a row index beyond `u32`.
    pub fn from_position(position: u64, column_count: u32) -> Result<Self> {
        if column_count == 0 {
            return Err(GridError::InvalidPosition(position));
        }
        let row = u32::try_from(position / u64::from(column_count))
            .map_err(|_| GridError::InvalidPosition(position))?;
        let column = u32::try_from(position % u64::from(column_count))
            .map_err(|_| GridError::InvalidPosition(position))?;
        Ok(Self { row, column })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_position_roundtrip() {
        let cell = Cell::new(7, 13);
        let position = cell.to_position(21);
        assert_eq!(position, 7 * 21 + 13);
        assert_eq!(Cell::from_position(position, 21).unwrap(), cell);
    }

    #[test]
    fn test_zero_columns_is_invalid() {
        assert!(matches!(
            Cell::from_position(5, 0),
            Err(crate::error::GridError::InvalidPosition(5))
        ));
    }

    #[test]
    fn test_first_and_last_column_of_row() {
        assert_eq!(Cell::from_position(21, 21).unwrap(), Cell::new(1, 0));
        assert_eq!(Cell::from_position(20, 21).unwrap(), Cell::new(0, 20));
    }
}
