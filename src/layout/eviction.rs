//! Eviction planning.
//!
//! A side of the bind rect becomes deletable once its boundary
//! (visible edge minus margin minus one) still lies inside the rect; every
//! materialized cell at or beyond that boundary is a candidate. Pinned
//! row-0 / column-0 cells are excluded while they are still on screen and
//! released once their column/row leaves the materialized range.

use std::collections::BTreeSet;

use crate::types::{BindRect, Cell};

/// Result of an eviction pass: the candidate cells and the bind rect after
/// shrinking each side to the boundary actually evicted.
#[derive(Debug, Clone)]
pub struct EvictionPlan {
    /// Cells eligible for detachment, before pinned exclusions.
    pub cells: BTreeSet<Cell>,
    /// Bind rect after the eligible sides are shrunk.
    pub rect: BindRect,
}

/// Compute the deletable cells outside the preload margin and the shrunken
/// bind rect. Pinned exclusions are applied separately with
/// [`retained_by_pin`], because they depend on per-cell pane state rather
/// than on the boundary geometry.
pub fn plan_eviction(
    bind: BindRect,
    visible_columns: (u32, u32),
    visible_rows: (u32, u32),
    margin: u32,
) -> EvictionPlan {
    let margin = i64::from(margin);

    let deletable_left = i64::from(visible_columns.0) - margin - 1;
    let deletable_left = (deletable_left >= i64::from(bind.left)).then_some(deletable_left);
    let deletable_right = i64::from(visible_columns.1) + margin + 1;
    let deletable_right = (deletable_right <= i64::from(bind.right)).then_some(deletable_right);
    let deletable_top = i64::from(visible_rows.0) - margin - 1;
    let deletable_top = (deletable_top >= i64::from(bind.top)).then_some(deletable_top);
    let deletable_bottom = i64::from(visible_rows.1) + margin + 1;
    let deletable_bottom = (deletable_bottom <= i64::from(bind.bottom)).then_some(deletable_bottom);

    let mut cells: BTreeSet<Cell> = BTreeSet::new();
    let mut rect = bind;

    if let Some(boundary) = deletable_left {
        let boundary = u32::try_from(boundary).unwrap_or(0);
        for row in bind.top..=bind.bottom {
            for column in bind.left..=boundary {
                cells.insert(Cell::new(row, column));
            }
        }
        rect.left = boundary + 1;
    }
    if let Some(boundary) = deletable_right {
        let boundary = u32::try_from(boundary).unwrap_or(u32::MAX);
        for row in bind.top..=bind.bottom {
            for column in boundary..=bind.right {
                cells.insert(Cell::new(row, column));
            }
        }
        rect.right = boundary - 1;
    }
    if let Some(boundary) = deletable_top {
        let boundary = u32::try_from(boundary).unwrap_or(0);
        for row in bind.top..=boundary {
            for column in bind.left..=bind.right {
                cells.insert(Cell::new(row, column));
            }
        }
        rect.top = boundary + 1;
    }
    if let Some(boundary) = deletable_bottom {
        let boundary = u32::try_from(boundary).unwrap_or(u32::MAX);
        for row in boundary..=bind.bottom {
            for column in bind.left..=bind.right {
                cells.insert(Cell::new(row, column));
            }
        }
        rect.bottom = boundary - 1;
    }

    EvictionPlan { cells, rect }
}

/// Whether a pinned cell must survive this eviction pass: a header cell
/// stays while its column is still materialized, a pinned-column cell while
/// its row is. `bind` is the rect from before the shrink.
pub fn retained_by_pin(cell: Cell, bind: BindRect, fix_header: bool, fix_column: bool) -> bool {
    (fix_header && cell.row == 0 && bind.contains_column(cell.column))
        || (fix_column && cell.column == 0 && bind.contains_row(cell.row))
}

/// Whether a cell is an eviction candidate purely because of its pane flag.
/// Pinned cells left behind outside the bind rect by an earlier shrink are
/// swept up this way once [`retained_by_pin`] stops protecting them.
pub fn pinned_candidate(cell: Cell, fix_header: bool, fix_column: bool) -> bool {
    (fix_header && cell.row == 0) || (fix_column && cell.column == 0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    const BIND: BindRect = BindRect {
        left: 0,
        top: 0,
        right: 8,
        bottom: 12,
    };

    #[test]
    fn test_no_eligible_boundary_evicts_nothing() {
        let plan = plan_eviction(BIND, (0, 7), (0, 11), 1);
        assert!(plan.cells.is_empty());
        assert_eq!(plan.rect, BIND);
    }

    #[test]
    fn test_left_boundary_evicts_whole_columns() {
        // Scrolled right: columns 0..=1 are beyond the margin.
        let plan = plan_eviction(BIND, (3, 7), (0, 11), 1);
        assert!(plan.cells.contains(&Cell::new(0, 0)));
        assert!(plan.cells.contains(&Cell::new(12, 1)));
        assert!(!plan.cells.contains(&Cell::new(0, 2)));
        assert_eq!(plan.rect.left, 2);
        assert_eq!(plan.rect.right, BIND.right);
    }

    #[test]
    fn test_top_boundary_shrinks_rect() {
        let plan = plan_eviction(BIND, (0, 7), (4, 11), 1);
        assert!(plan.cells.contains(&Cell::new(2, 8)));
        assert!(!plan.cells.contains(&Cell::new(3, 0)));
        assert_eq!(plan.rect.top, 3);
    }

    #[test]
    fn test_trailing_boundaries() {
        // Scrolled back toward the origin: the far side is deletable.
        let plan = plan_eviction(BIND, (0, 4), (0, 8), 1);
        assert!(plan.cells.contains(&Cell::new(0, 6)));
        assert!(plan.cells.contains(&Cell::new(10, 0)));
        assert_eq!(plan.rect.right, 5);
        assert_eq!(plan.rect.bottom, 9);
    }

    #[test]
    fn test_pin_retention_follows_materialized_range() {
        assert!(retained_by_pin(Cell::new(0, 3), BIND, true, false));
        // Column 9 is outside the bind rect; the header cell is released.
        assert!(!retained_by_pin(Cell::new(0, 9), BIND, true, false));
        assert!(retained_by_pin(Cell::new(5, 0), BIND, false, true));
        assert!(!retained_by_pin(Cell::new(13, 0), BIND, false, true));
        assert!(!retained_by_pin(Cell::new(0, 3), BIND, false, false));
    }

    #[test]
    fn test_pinned_candidates_by_flag() {
        assert!(pinned_candidate(Cell::new(0, 7), true, false));
        assert!(!pinned_candidate(Cell::new(0, 7), false, true));
        assert!(pinned_candidate(Cell::new(7, 0), false, true));
    }
}
