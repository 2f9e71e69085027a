//! Anchor resolution and screen placement for newly materialized cells.
//!
//! A freshly issued view has no pixel position. It is anchored to an
//! already-placed logical neighbor: the neighbor's far edge becomes the new
//! cell's near edge. Cell (0, 0) is the base case and is always anchored at
//! pixel (0, 0).

use crate::types::{Cell, CellSize, PixelRect};

/// Screen anchor for a new cell. Exactly one corner is known; the final
/// rect is derived from it and the cell's recorded size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorRegion {
    /// Known left/top corner pixel of the new cell.
    LeftTop {
        /// X of the new cell's left edge.
        x: i64,
        /// Y of the new cell's top edge.
        y: i64,
    },
    /// Known right/bottom corner pixel of the new cell.
    RightBottom {
        /// X of the new cell's right edge.
        x: i64,
        /// Y of the new cell's bottom edge.
        y: i64,
    },
}

/// The cell to the left of `cell`, if any.
pub fn left_neighbor(cell: Cell) -> Option<Cell> {
    cell.column
        .checked_sub(1)
        .map(|column| Cell::new(cell.row, column))
}

/// The cell above `cell`, if any.
pub fn up_neighbor(cell: Cell) -> Option<Cell> {
    cell.row.checked_sub(1).map(|row| Cell::new(row, cell.column))
}

/// The cell to the right of `cell`, if any.
pub fn right_neighbor(cell: Cell, column_count: u32) -> Option<Cell> {
    let column = cell.column + 1;
    (column < column_count).then(|| Cell::new(cell.row, column))
}

/// The cell below `cell`, if any.
pub fn down_neighbor(cell: Cell, row_count: u32) -> Option<Cell> {
    let row = cell.row + 1;
    (row < row_count).then(|| Cell::new(row, cell.column))
}

/// Scan the attached cells for a placed neighbor of `cell` and derive an
/// anchor from it. Returns `None` when no neighbor is attached yet; the
/// caller then positions the cell provisionally and relies on the
/// end-of-round reposition pass.
pub fn resolve_anchor<'a>(
    cell: Cell,
    column_count: u32,
    row_count: u32,
    attached: impl Iterator<Item = (Cell, &'a PixelRect)>,
) -> Option<AnchorRegion> {
    if cell.row == 0 && cell.column == 0 {
        return Some(AnchorRegion::LeftTop { x: 0, y: 0 });
    }

    let on_left = left_neighbor(cell);
    let on_up = up_neighbor(cell);
    let on_right = right_neighbor(cell, column_count);
    let on_down = down_neighbor(cell, row_count);

    let mut left: Option<i64> = None;
    let mut top: Option<i64> = None;
    let mut right: Option<i64> = None;
    let mut bottom: Option<i64> = None;

    for (placed, rect) in attached {
        if Some(placed) == on_left {
            left = Some(rect.right);
            top = Some(rect.top);
        }
        if Some(placed) == on_up {
            left = Some(rect.left);
            top = Some(rect.bottom);
        }
        if Some(placed) == on_right {
            right = Some(rect.left);
            bottom = Some(rect.bottom);
        }
        if Some(placed) == on_down {
            right = Some(rect.right);
            bottom = Some(rect.top);
        }
    }

    if let (Some(x), Some(y)) = (left, top) {
        return Some(AnchorRegion::LeftTop { x, y });
    }
    if let (Some(x), Some(y)) = (right, bottom) {
        return Some(AnchorRegion::RightBottom { x, y });
    }
    None
}

/// Final screen rect for a cell of `size` at `anchor`.
pub fn place(anchor: AnchorRegion, size: CellSize) -> PixelRect {
    let width = i64::from(size.width);
    let height = i64::from(size.height);
    match anchor {
        AnchorRegion::LeftTop { x, y } => PixelRect::new(x, y, x + width, y + height),
        AnchorRegion::RightBottom { x, y } => PixelRect::new(x - width, y - height, x, y),
    }
}
