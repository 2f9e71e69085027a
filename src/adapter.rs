//! Data adapters: cell content supply for the grid.
//!
//! The adapter owns the table's shape (`column_count` is fixed, the item
//! count may grow as pages arrive) and binds content into host views before
//! they are measured. [`RowTableAdapter`] is the batteries-included
//! implementation for row-major in-memory data; it validates its shape
//! eagerly so a malformed data set is rejected before any layout runs.

use crate::error::{GridError, Result};
use crate::types::Cell;

/// Content source for a grid over views of type `V`.
pub trait DataAdapter<V> {
    /// Fixed number of columns.
    fn column_count(&self) -> u32;

    /// Current total number of cells. Re-read every layout pass, so a
    /// grown count extends the table on the next pass.
    fn item_count(&self) -> u64;

    /// Populate `view` with the content of `cell`, before measurement.
    ///
    /// # Errors
    /// [`GridError::InvalidPosition`] when the cell is not in the table.
    fn bind(&mut self, view: &mut V, cell: Cell) -> Result<()>;
}

/// A view that can receive content of type `C` from a row table.
pub trait BindContent<C> {
    /// Take the cell's content prior to measurement.
    fn bind_content(&mut self, content: &C);
}

/// Row-major in-memory data source. Every row must have exactly the column
/// count declared by the first row; mismatches are rejected at construction.
#[derive(Debug, Clone)]
pub struct RowTableAdapter<C> {
    rows: Vec<Vec<C>>,
    column_count: u32,
}

impl<C> RowTableAdapter<C> {
    /// Build an adapter from rows of cell content.
    ///
    /// # Errors
    /// [`GridError::InconsistentRowWidth`] listing every row whose column
    /// count differs from the first row's.
    pub fn new(rows: Vec<Vec<C>>) -> Result<Self> {
        let column_count = rows.first().map_or(0, Vec::len);
        let offending: Vec<(usize, usize)> = rows
            .iter()
            .enumerate()
            .filter(|(_, columns)| columns.len() != column_count)
            .map(|(index, columns)| (index, columns.len()))
            .collect();
        if !offending.is_empty() {
            log::error!(
                "rejecting table data: expected {column_count} columns, offending rows {offending:?}"
            );
            return Err(GridError::InconsistentRowWidth {
                expected: column_count,
                rows: offending,
            });
        }
        Ok(Self {
            rows,
            column_count: u32::try_from(column_count)
                .map_err(|_| GridError::InvalidPosition(u64::MAX))?,
        })
    }

    /// Number of rows currently loaded.
    pub fn row_count(&self) -> u32 {
        u32::try_from(self.rows.len()).unwrap_or(u32::MAX)
    }

    /// Append one row, e.g. when a page arrives. The row must match the
    /// established column count.
    ///
    /// # Errors
    /// [`GridError::InconsistentRowWidth`] when the new row's width differs.
    pub fn push_row(&mut self, row: Vec<C>) -> Result<()> {
        if row.len() != self.column_count as usize {
            return Err(GridError::InconsistentRowWidth {
                expected: self.column_count as usize,
                rows: vec![(self.rows.len(), row.len())],
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Content of `cell`.
    ///
    /// # Errors
    /// [`GridError::InvalidPosition`] when the cell is outside the table.
    pub fn item(&self, cell: Cell) -> Result<&C> {
        self.rows
            .get(cell.row as usize)
            .and_then(|columns| columns.get(cell.column as usize))
            .ok_or_else(|| GridError::InvalidPosition(cell.to_position(self.column_count)))
    }

    /// Content at a linear adapter position.
    ///
    /// # Errors
    /// [`GridError::InvalidPosition`] when the position maps outside the
    /// table.
    pub fn item_at(&self, position: u64) -> Result<&C> {
        let cell = Cell::from_position(position, self.column_count)?;
        self.item(cell)
    }
}

impl<C, V: BindContent<C>> DataAdapter<V> for RowTableAdapter<C> {
    fn column_count(&self) -> u32 {
        self.column_count
    }

    fn item_count(&self) -> u64 {
        u64::from(self.row_count()) * u64::from(self.column_count)
    }

    fn bind(&mut self, view: &mut V, cell: Cell) -> Result<()> {
        let content = self.item(cell)?;
        view.bind_content(content);
        Ok(())
    }
}
