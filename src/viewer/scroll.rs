//! Scroll handling: delta clamping against the table edges, pin-aware
//! shifting of attached cells, and the follow-up expand/evict pass.

use log::{debug, trace};

use crate::adapter::DataAdapter;
use crate::error::Result;
use crate::surface::RenderSurface;

use super::GridView;

impl<S: RenderSurface, A: DataAdapter<S::View>> GridView<S, A> {
    /// Apply a scroll delta. Positive `dx` scrolls content left (reveals
    /// columns to the right), positive `dy` scrolls content up.
    ///
    /// The delta is clamped so the table edge never detaches from the
    /// viewport edge; the consumed `(dx, dy)` is returned so the host can
    /// drive overscroll effects. A fully clamped delta is a no-op: no
    /// expansion or eviction runs.
    ///
    /// # Errors
    /// Propagates contract violations from the follow-up layout pass.
    pub fn on_scroll(&mut self, dx: i64, dy: i64) -> Result<(i64, i64)> {
        let dx = self.clamp_horizontal(dx);
        let dy = self.clamp_vertical(dy);
        if dx == 0 && dy == 0 {
            trace!("scroll delta fully clamped; skipping layout pass");
            return Ok((0, 0));
        }

        self.offset_x -= dx;
        self.offset_y -= dy;
        self.shift_attached(-dx, -dy);
        self.process_all_items()?;
        debug!(
            "scrolled by ({dx}, {dy}); offset ({}, {}), {} cells attached",
            self.offset_x,
            self.offset_y,
            self.attached.len()
        );
        Ok((dx, dy))
    }

    /// Clamp a horizontal delta so the content never scrolls past either
    /// table edge. A table narrower than the viewport cannot scroll right
    /// at all.
    pub fn clamp_horizontal(&self, dx: i64) -> i64 {
        let table = self.geometry.table_width();
        let viewport = i64::from(self.viewport.width);
        if dx < 0 && self.offset_x - dx > 0 {
            return self.offset_x;
        }
        if dx > 0 {
            if table < viewport {
                return 0;
            }
            if self.offset_x + table - dx < viewport {
                return self.offset_x + table - viewport;
            }
        }
        dx
    }

    /// Vertical counterpart of [`GridView::clamp_horizontal`].
    pub fn clamp_vertical(&self, dy: i64) -> i64 {
        let table = self.geometry.table_height();
        let viewport = i64::from(self.viewport.height);
        if dy < 0 && self.offset_y - dy > 0 {
            return self.offset_y;
        }
        if dy > 0 {
            if table < viewport {
                return 0;
            }
            if self.offset_y + table - dy < viewport {
                return self.offset_y + table - viewport;
            }
        }
        dy
    }

    /// Translate every attached rect by the consumed delta, leaving pinned
    /// axes untouched: a header cell keeps its y, a pinned-column cell its x.
    fn shift_attached(&mut self, dx: i64, dy: i64) {
        let Self {
            surface,
            config,
            attached,
            ..
        } = self;
        for entry in attached.iter_mut() {
            let dx = if config.fix_column && entry.cell.column == 0 {
                0
            } else {
                dx
            };
            let dy = if config.fix_header && entry.cell.row == 0 {
                0
            } else {
                dy
            };
            if dx == 0 && dy == 0 {
                continue;
            }
            entry.rect = entry.rect.translated(dx, dy);
            surface.place(&mut entry.view, entry.rect);
        }
    }
}
