//! Per-column width and per-row height tracking.
//!
//! Sizes are unknown until a cell is first measured and are discovered
//! lazily. Within one session a recorded maximum only grows; a measurement
//! smaller than the recorded maximum forces the cell's own layout size up
//! instead of shrinking the column or row. Totals are maintained
//! incrementally, so a monotonic-max update is O(1).

use crate::error::{GridError, Result};
use crate::types::{Cell, CellSize};

/// Growth-only size maps for a grid session, plus the derived table totals.
///
/// Columns are a fixed-length arena (`column_count` is fixed at
/// construction); rows grow as measurements for new rows arrive. An entry of
/// `None` means the column/row has never been measured.
#[derive(Debug, Clone)]
pub struct GridGeometry {
    col_widths: Vec<Option<u32>>,
    row_heights: Vec<Option<u32>>,
    table_width: i64,
    table_height: i64,
}

impl GridGeometry {
    /// Empty geometry for a table with `column_count` columns.
    pub fn new(column_count: u32) -> Self {
        Self {
            col_widths: vec![None; column_count as usize],
            row_heights: Vec::new(),
            table_width: 0,
            table_height: 0,
        }
    }

    /// Number of columns in the table.
    pub fn column_count(&self) -> u32 {
        u32::try_from(self.col_widths.len()).unwrap_or(u32::MAX)
    }

    /// Number of rows that have appeared in a measurement so far.
    pub fn known_rows(&self) -> u32 {
        u32::try_from(self.row_heights.len()).unwrap_or(u32::MAX)
    }

    /// Record a measurement for `cell` and return the size the cell must be
    /// laid out with: the recorded column/row maxima, which are at least as
    /// large as `measured`.
    pub fn record_measurement(&mut self, cell: Cell, measured: CellSize) -> CellSize {
        let row = cell.row as usize;
        if row >= self.row_heights.len() {
            self.row_heights.resize(row + 1, None);
        }

        let column = cell.column as usize;
        if let Some(slot) = self.col_widths.get_mut(column) {
            let old = slot.unwrap_or(0);
            if measured.width > old {
                *slot = Some(measured.width);
                self.table_width += i64::from(measured.width) - i64::from(old);
            } else if slot.is_none() {
                *slot = Some(measured.width);
            }
        }
        if let Some(slot) = self.row_heights.get_mut(row) {
            let old = slot.unwrap_or(0);
            if measured.height > old {
                *slot = Some(measured.height);
                self.table_height += i64::from(measured.height) - i64::from(old);
            } else if slot.is_none() {
                *slot = Some(measured.height);
            }
        }

        CellSize {
            width: self.column_width(cell.column).unwrap_or(measured.width),
            height: self.row_height(cell.row).unwrap_or(measured.height),
        }
    }

    /// Recorded maximum width of `column`, if it was ever measured.
    pub fn column_width(&self, column: u32) -> Option<u32> {
        self.col_widths.get(column as usize).copied().flatten()
    }

    /// Recorded maximum height of `row`, if it was ever measured.
    pub fn row_height(&self, row: u32) -> Option<u32> {
        self.row_heights.get(row as usize).copied().flatten()
    }

    /// Width of `column`, unmeasured columns counting as zero.
    pub fn column_width_or_zero(&self, column: u32) -> i64 {
        i64::from(self.column_width(column).unwrap_or(0))
    }

    /// Height of `row`, unmeasured rows counting as zero.
    pub fn row_height_or_zero(&self, row: u32) -> i64 {
        i64::from(self.row_height(row).unwrap_or(0))
    }

    /// Size a cell must be laid out with.
    ///
    /// # Errors
    /// Returns [`GridError::MissingMeasurement`] when the cell's column or
    /// row has never been measured. Positioning such a cell is a defect in
    /// the expansion/placement ordering, not a recoverable state.
    pub fn cell_size(&self, cell: Cell) -> Result<CellSize> {
        let width = self
            .column_width(cell.column)
            .ok_or(GridError::MissingMeasurement {
                row: cell.row,
                column: cell.column,
            })?;
        let height = self
            .row_height(cell.row)
            .ok_or(GridError::MissingMeasurement {
                row: cell.row,
                column: cell.column,
            })?;
        Ok(CellSize { width, height })
    }

    /// Sum of all known column widths.
    pub fn table_width(&self) -> i64 {
        self.table_width
    }

    /// Sum of all known row heights.
    pub fn table_height(&self) -> i64 {
        self.table_height
    }

    /// X of the left edge of `column`: the summed widths of all columns
    /// before it.
    pub fn prefix_x(&self, column: u32) -> i64 {
        self.col_widths
            .iter()
            .take(column as usize)
            .map(|w| i64::from(w.unwrap_or(0)))
            .sum()
    }

    /// Y of the top edge of `row`: the summed heights of all rows before it.
    pub fn prefix_y(&self, row: u32) -> i64 {
        self.row_heights
            .iter()
            .take(row as usize)
            .map(|h| i64::from(h.unwrap_or(0)))
            .sum()
    }

    /// Clear every recorded size and total. Used by refresh; the next layout
    /// pass rediscovers all geometry from scratch.
    pub fn reset(&mut self) {
        for slot in &mut self.col_widths {
            *slot = None;
        }
        self.row_heights.clear();
        self.table_width = 0;
        self.table_height = 0;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_maxima_only_grow() {
        let mut geometry = GridGeometry::new(4);
        geometry.record_measurement(Cell::new(0, 1), CellSize::new(80, 40));
        let effective = geometry.record_measurement(Cell::new(2, 1), CellSize::new(50, 25));

        // The smaller measurement is forced up, not recorded.
        assert_eq!(geometry.column_width(1), Some(80));
        assert_eq!(effective.width, 80);
        // Row 2 had no prior height, so the measurement stands.
        assert_eq!(geometry.row_height(2), Some(25));
        assert_eq!(effective.height, 25);
    }

    #[test]
    fn test_totals_follow_maxima() {
        let mut geometry = GridGeometry::new(3);
        geometry.record_measurement(Cell::new(0, 0), CellSize::new(80, 40));
        geometry.record_measurement(Cell::new(0, 1), CellSize::new(60, 30));
        assert_eq!(geometry.table_width(), 140);
        assert_eq!(geometry.table_height(), 40);

        geometry.record_measurement(Cell::new(1, 1), CellSize::new(100, 20));
        assert_eq!(geometry.table_width(), 180);
        assert_eq!(geometry.table_height(), 60);
    }

    #[test]
    fn test_prefix_sums_skip_unmeasured() {
        let mut geometry = GridGeometry::new(5);
        geometry.record_measurement(Cell::new(0, 0), CellSize::new(80, 40));
        geometry.record_measurement(Cell::new(0, 3), CellSize::new(70, 40));
        // Columns 1 and 2 are unmeasured and count as zero.
        assert_eq!(geometry.prefix_x(3), 80);
        assert_eq!(geometry.prefix_x(4), 150);
    }

    #[test]
    fn test_unmeasured_cell_is_a_contract_violation() {
        let geometry = GridGeometry::new(2);
        assert!(matches!(
            geometry.cell_size(Cell::new(0, 0)),
            Err(GridError::MissingMeasurement { row: 0, column: 0 })
        ));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut geometry = GridGeometry::new(2);
        geometry.record_measurement(Cell::new(0, 0), CellSize::new(80, 40));
        geometry.reset();
        assert_eq!(geometry.table_width(), 0);
        assert_eq!(geometry.table_height(), 0);
        assert_eq!(geometry.column_width(0), None);
        assert_eq!(geometry.known_rows(), 0);
    }

    #[test]
    fn test_zero_sized_measurement_counts_as_measured() {
        let mut geometry = GridGeometry::new(1);
        geometry.record_measurement(Cell::new(0, 0), CellSize::new(0, 0));
        assert_eq!(geometry.column_width(0), Some(0));
        assert!(geometry.cell_size(Cell::new(0, 0)).is_ok());
    }
}
