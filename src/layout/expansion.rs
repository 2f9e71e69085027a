//! Ring expansion planning.
//!
//! Computes the next band of cells to materialize beyond the bind rect,
//! bounded by the preload margin around the visible range. One call plans a
//! single ring; the caller re-derives the bind rect after attaching it and
//! calls again until the plan comes back empty, because placing a ring may
//! newly unlock the next one.

use std::collections::BTreeSet;

use crate::types::{BindRect, Cell};

/// Inputs for one ring-planning pass.
#[derive(Debug, Clone, Copy)]
pub struct RingInput {
    /// Current materialized rectangle.
    pub bind: BindRect,
    /// Visible column range, inclusive.
    pub visible_columns: (u32, u32),
    /// Visible row range, inclusive.
    pub visible_rows: (u32, u32),
    /// Preload margin in rings.
    pub margin: u32,
    /// Fixed table column count.
    pub column_count: u32,
    /// Current table row count (grows as pages arrive).
    pub row_count: u32,
    /// Row 0 is a pinned header.
    pub fix_header: bool,
    /// Column 0 is a pinned pane.
    pub fix_column: bool,
}

/// Plan the next ring of cells to materialize.
///
/// Candidates lie strictly outside the bind rect but within the margin
/// bands, ordered nearest-to-bind first so each cell has a placed neighbor
/// by the time it is attached. When a pass produces candidates and a pane is
/// pinned, the row-0 cell of every touched column (and the column-0 cell of
/// every touched row) is appended so the pinned pane grows with the ring.
pub fn plan_next_ring(input: &RingInput) -> Vec<Cell> {
    let bind = input.bind;
    let margin = i64::from(input.margin);
    let band_left = i64::from(input.visible_columns.0) - margin;
    let band_right = i64::from(input.visible_columns.1) + margin;
    let band_top = i64::from(input.visible_rows.0) - margin;
    let band_bottom = i64::from(input.visible_rows.1) + margin;

    let column_in_table = |column: i64| column >= 0 && column < i64::from(input.column_count);
    let row_in_table = |row: i64| row >= 0 && row < i64::from(input.row_count);

    let mut seen: BTreeSet<Cell> = BTreeSet::new();
    let mut ring: Vec<Cell> = Vec::new();
    let mut push = |row: i64, column: i64| {
        if !row_in_table(row) || !column_in_table(column) {
            return;
        }
        let cell = Cell::new(
            u32::try_from(row).unwrap_or(u32::MAX),
            u32::try_from(column).unwrap_or(u32::MAX),
        );
        if seen.insert(cell) {
            ring.push(cell);
        }
    };

    // Top and bottom bands span only the materialized columns; corners are
    // reached through the left/right bands below.
    let mut row = i64::from(bind.top) - 1;
    while row >= band_top {
        for column in i64::from(bind.left)..=i64::from(bind.right) {
            push(row, column);
        }
        row -= 1;
    }
    for row in i64::from(bind.bottom) + 1..=band_bottom {
        for column in i64::from(bind.left)..=i64::from(bind.right) {
            push(row, column);
        }
    }

    // Left and right bands span the full candidate row range, nearest
    // column first so a farther column can anchor to a nearer one placed in
    // the same pass.
    let mut column = i64::from(bind.left) - 1;
    while column >= band_left {
        for row in band_top..=band_bottom {
            push(row, column);
        }
        column -= 1;
    }
    for column in i64::from(bind.right) + 1..=band_right {
        for row in band_top..=band_bottom {
            push(row, column);
        }
    }

    if ring.is_empty() {
        return ring;
    }

    if input.fix_header || input.fix_column {
        let touched_columns: BTreeSet<u32> = seen.iter().map(|cell| cell.column).collect();
        let touched_rows: BTreeSet<u32> = seen.iter().map(|cell| cell.row).collect();
        if input.fix_header {
            for column in touched_columns {
                let cell = Cell::new(0, column);
                if seen.insert(cell) {
                    ring.push(cell);
                }
            }
        }
        if input.fix_column {
            for row in touched_rows {
                let cell = Cell::new(row, 0);
                if seen.insert(cell) {
                    ring.push(cell);
                }
            }
        }
    }

    ring
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn input(bind: BindRect, visible_columns: (u32, u32), visible_rows: (u32, u32)) -> RingInput {
        RingInput {
            bind,
            visible_columns,
            visible_rows,
            margin: 1,
            column_count: 21,
            row_count: 101,
            fix_header: false,
            fix_column: false,
        }
    }

    #[test]
    fn test_ring_covers_margin_bands() {
        let bind = BindRect {
            left: 0,
            top: 0,
            right: 5,
            bottom: 10,
        };
        let ring = plan_next_ring(&input(bind, (0, 5), (0, 10)));

        // Left and top bands fall off the table; the ring is column 6 for
        // every candidate row plus row 11 across the bind columns.
        assert!(ring.contains(&Cell::new(0, 6)));
        assert!(ring.contains(&Cell::new(11, 6)));
        assert!(ring.contains(&Cell::new(11, 0)));
        assert!(!ring.contains(&Cell::new(0, 7)));
        assert!(!ring.contains(&Cell::new(12, 0)));
        assert_eq!(ring.len(), 12 + 6);
    }

    #[test]
    fn test_interior_bind_rect_produces_empty_ring() {
        let bind = BindRect {
            left: 0,
            top: 0,
            right: 6,
            bottom: 11,
        };
        let ring = plan_next_ring(&input(bind, (0, 5), (0, 10)));
        assert!(ring.is_empty());
    }

    #[test]
    fn test_candidates_stay_inside_table() {
        let bind = BindRect {
            left: 15,
            top: 95,
            right: 20,
            bottom: 100,
        };
        let ring = plan_next_ring(&input(bind, (15, 20), (95, 100)));
        // Right and bottom bands are off the table edge; only the
        // left/top margin remains.
        assert!(ring.iter().all(|cell| cell.column < 21 && cell.row < 101));
        assert!(ring.contains(&Cell::new(94, 15)));
        assert!(ring.contains(&Cell::new(95, 14)));
    }

    #[test]
    fn test_nearest_column_planned_first() {
        let bind = BindRect {
            left: 10,
            top: 0,
            right: 12,
            bottom: 2,
        };
        let mut ring_input = input(bind, (10, 12), (0, 2));
        ring_input.margin = 2;
        let ring = plan_next_ring(&ring_input);

        let near = ring
            .iter()
            .position(|cell| *cell == Cell::new(0, 9))
            .unwrap();
        let far = ring
            .iter()
            .position(|cell| *cell == Cell::new(0, 8))
            .unwrap();
        assert!(near < far, "column 9 must be planned before column 8");
    }

    #[test]
    fn test_pinned_panes_ride_along() {
        let bind = BindRect {
            left: 5,
            top: 5,
            right: 8,
            bottom: 8,
        };
        let mut ring_input = input(bind, (5, 8), (5, 8));
        ring_input.fix_header = true;
        ring_input.fix_column = true;
        let ring = plan_next_ring(&ring_input);

        // The right band touches column 9, so its header cell rides along;
        // the bottom band touches row 9, so its pinned-column cell does too.
        assert!(ring.contains(&Cell::new(0, 9)));
        assert!(ring.contains(&Cell::new(9, 0)));
    }

    #[test]
    fn test_no_pinned_cells_without_candidates() {
        let bind = BindRect {
            left: 0,
            top: 0,
            right: 20,
            bottom: 100,
        };
        let mut ring_input = input(bind, (0, 20), (0, 100));
        ring_input.fix_header = true;
        let ring = plan_next_ring(&ring_input);
        assert!(ring.is_empty());
    }
}
