//! Visible range computation.
//!
//! Walks columns (or rows) from zero accumulating known widths (heights)
//! and reports the first index whose cumulative half-open interval
//! `[cumulative, cumulative + size)` contains the viewport's leading and
//! trailing edge pixels. Unmeasured entries count as zero width and can
//! never contain a boundary pixel, so with incomplete geometry the result
//! falls back to the supplied default range (the current bind rect edges).

use crate::geometry::GridGeometry;

/// Visible column range `(left, right)`, both inclusive, for the given
/// horizontal scroll offset and viewport width.
pub fn visible_columns(
    geometry: &GridGeometry,
    offset_x: i64,
    viewport_width: i64,
    fallback: (u32, u32),
) -> (u32, u32) {
    let leading = offset_x.abs();
    let trailing = leading + viewport_width;

    let (mut left, mut right) = fallback;
    let mut cumulative: i64 = 0;
    let mut left_found = false;
    let mut right_found = false;
    for column in 0..geometry.column_count() {
        let width = geometry.column_width_or_zero(column);
        if leading >= cumulative && leading < cumulative + width {
            left = column;
            left_found = true;
        }
        if trailing >= cumulative && trailing < cumulative + width {
            right = column;
            right_found = true;
        }
        if left_found && right_found {
            break;
        }
        cumulative += width;
    }

    // The trailing edge ran past the measured extent: at least one more
    // column is visible, even without a margin to preload it. Nudge the
    // range one column outward so it gets materialized and measured.
    if left_found && !right_found && trailing >= cumulative {
        right = right
            .saturating_add(1)
            .min(geometry.column_count().saturating_sub(1));
    }

    (left, right)
}

/// Visible row range `(top, bottom)`, both inclusive, for the given
/// vertical scroll offset and viewport height.
pub fn visible_rows(
    geometry: &GridGeometry,
    offset_y: i64,
    viewport_height: i64,
    fallback: (u32, u32),
) -> (u32, u32) {
    let leading = offset_y.abs();
    let trailing = leading + viewport_height;

    let (mut top, mut bottom) = fallback;
    let mut cumulative: i64 = 0;
    let mut top_found = false;
    let mut bottom_found = false;
    for row in 0..geometry.known_rows() {
        let height = geometry.row_height_or_zero(row);
        if leading >= cumulative && leading < cumulative + height {
            top = row;
            top_found = true;
        }
        if trailing >= cumulative && trailing < cumulative + height {
            bottom = row;
            bottom_found = true;
        }
        if top_found && bottom_found {
            break;
        }
        cumulative += height;
    }

    // Same nudge as for columns; rows have no fixed count (tables grow), so
    // the consumer filters the extra index against the current row count.
    if top_found && !bottom_found && trailing >= cumulative {
        bottom = bottom.saturating_add(1);
    }

    (top, bottom)
}
