//! Pixel rectangles and the materialized (bind) rectangle.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Rectangle in content pixel coordinates. Edges are half-open:
/// a rect covers `[left, right) x [top, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    /// X of the left edge.
    pub left: i64,
    /// Y of the top edge.
    pub top: i64,
    /// X one past the right edge.
    pub right: i64,
    /// Y one past the bottom edge.
    pub bottom: i64,
}

impl PixelRect {
    /// Build a rect from its four edges.
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    /// Height in pixels.
    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }

    /// The same rect moved by `(dx, dy)`.
    pub fn translated(&self, dx: i64, dy: i64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }
}

/// The contiguous rectangle of columns x rows currently attached to the
/// screen. Invariant: `left <= right` and `top <= bottom`.
///
/// Pinned row-0 / column-0 cells may remain attached outside this rectangle
/// after a side has been shrunk by eviction; they are the one sanctioned
/// exception to "bind rect == attached cells".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindRect {
    /// Leftmost materialized column.
    pub left: u32,
    /// Topmost materialized row.
    pub top: u32,
    /// Rightmost materialized column (inclusive).
    pub right: u32,
    /// Bottommost materialized row (inclusive).
    pub bottom: u32,
}

impl BindRect {
    /// Rect covering exactly one cell.
    pub fn for_cell(cell: Cell) -> Self {
        Self {
            left: cell.column,
            top: cell.row,
            right: cell.column,
            bottom: cell.row,
        }
    }

    /// Grow the rect so it covers `cell`.
    pub fn expand_to(&mut self, cell: Cell) {
        if cell.row < self.top {
            self.top = cell.row;
        }
        if cell.row > self.bottom {
            self.bottom = cell.row;
        }
        if cell.column < self.left {
            self.left = cell.column;
        }
        if cell.column > self.right {
            self.right = cell.column;
        }
    }

    /// Whether `column` lies within the materialized column range.
    pub fn contains_column(&self, column: u32) -> bool {
        column >= self.left && column <= self.right
    }

    /// Whether `row` lies within the materialized row range.
    pub fn contains_row(&self, row: u32) -> bool {
        row >= self.top && row <= self.bottom
    }

    /// Whether `cell` lies within the rect.
    pub fn contains(&self, cell: Cell) -> bool {
        self.contains_row(cell.row) && self.contains_column(cell.column)
    }
}
