//! The stateful grid view: seeding, ring expansion, eviction, and
//! repositioning, driven by host layout and scroll callbacks.
//!
//! One layout pass runs synchronously: on first attach it seeds an initial
//! region sized to the viewport, then evicts cells outside the preload
//! margin, expands the bind rect ring by ring until the planner returns an
//! empty set, sweeps in any strictly-visible cell that is still missing, and
//! finally repositions every materialized cell from the current geometry.

mod scroll;

use std::collections::BTreeSet;
use std::mem;

use log::{debug, trace};

use crate::adapter::DataAdapter;
use crate::error::Result;
use crate::geometry::GridGeometry;
use crate::layout::{eviction, expansion, placer, viewport};
use crate::surface::RenderSurface;
use crate::types::{BindRect, Cell, GridConfig, PixelRect, ViewportSize};

/// Phase of the current layout session.
///
/// `Empty` -> `Seeding` -> `Steady`; `refresh()` returns to `Empty` and
/// every scroll delta re-enters `Steady`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPhase {
    /// No data, or refreshed; nothing is materialized.
    Empty,
    /// First attach in progress: filling an initial viewport-sized region.
    Seeding,
    /// Scroll-driven expand/evict loop.
    Steady,
}

/// A materialized cell: its view handle and current screen rect.
struct AttachedCell<V> {
    cell: Cell,
    rect: PixelRect,
    view: V,
}

/// Virtualized grid view over a rendering surface and a data adapter.
///
/// Decides which cells must be materialized for the current scroll
/// position, recycles cells that left the preload margin, and keeps a
/// pinned header row and/or pinned left column on screen while scrolling.
pub struct GridView<S: RenderSurface, A: DataAdapter<S::View>> {
    surface: S,
    adapter: A,
    config: GridConfig,
    geometry: GridGeometry,
    bind: Option<BindRect>,
    offset_x: i64,
    offset_y: i64,
    viewport: ViewportSize,
    attached: Vec<AttachedCell<S::View>>,
    phase: LayoutPhase,
}

impl<S: RenderSurface, A: DataAdapter<S::View>> GridView<S, A> {
    /// Create a view over `surface` and `adapter` with the given
    /// configuration. Nothing is materialized until the first layout pass.
    pub fn new(surface: S, adapter: A, config: GridConfig) -> Self {
        let geometry = GridGeometry::new(adapter.column_count());
        Self {
            surface,
            adapter,
            config,
            geometry,
            bind: None,
            offset_x: 0,
            offset_y: 0,
            viewport: ViewportSize::default(),
            attached: Vec::new(),
            phase: LayoutPhase::Empty,
        }
    }

    /// Run one layout pass for the given viewport size.
    ///
    /// # Errors
    /// Propagates contract violations ([`crate::GridError`]); there are no
    /// recoverable failures here.
    pub fn on_layout_pass(&mut self, viewport: ViewportSize) -> Result<()> {
        self.viewport = viewport;
        if viewport.width == 0 || viewport.height == 0 {
            return Ok(());
        }
        if self.geometry.column_count() == 0 || self.adapter.item_count() == 0 {
            self.detach_all();
            self.phase = LayoutPhase::Empty;
            return Ok(());
        }
        self.process_all_items()
    }

    /// Invalidate all geometry and materialized cells atomically. The next
    /// layout pass reseeds from the current viewport size as if
    /// cold-started.
    pub fn refresh(&mut self) {
        debug!("refresh: dropping geometry and all materialized cells");
        self.detach_all();
        self.geometry.reset();
        self.offset_x = 0;
        self.offset_y = 0;
        self.phase = LayoutPhase::Empty;
    }

    /// Current session phase.
    pub fn phase(&self) -> LayoutPhase {
        self.phase
    }

    /// The materialized rectangle, if anything is attached.
    pub fn bind_rect(&self) -> Option<BindRect> {
        self.bind
    }

    /// Current `(x, y)` scroll offset. Zero or negative; the magnitude is
    /// how far the content has been scrolled.
    pub fn scroll_offset(&self) -> (i64, i64) {
        (self.offset_x, self.offset_y)
    }

    /// Discovered geometry for this session.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Configuration this view was built with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The host surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The data adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Mutable adapter access, e.g. to deliver a loaded page between
    /// layout passes.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Cells currently attached, with their screen rects.
    pub fn attached_cells(&self) -> impl Iterator<Item = (Cell, PixelRect)> + '_ {
        self.attached.iter().map(|entry| (entry.cell, entry.rect))
    }

    /// Number of currently attached cells.
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Whether `cell` is currently materialized.
    pub fn is_attached(&self, cell: Cell) -> bool {
        self.attached.iter().any(|entry| entry.cell == cell)
    }

    /// One full expand/evict pass over the materialized region.
    fn process_all_items(&mut self) -> Result<()> {
        if self.attached.is_empty() {
            self.phase = LayoutPhase::Seeding;
            self.seed_initial_cells()?;
            self.reposition_all()?;
        }

        self.evict_invisible_cells();

        loop {
            let ring = self.plan_ring();
            if ring.is_empty() {
                break;
            }
            let item_count = self.adapter.item_count();
            let column_count = self.geometry.column_count();
            let mut added = 0usize;
            for cell in ring {
                if self.is_attached(cell) {
                    continue;
                }
                if cell.to_position(column_count) >= item_count {
                    continue;
                }
                self.attach_cell(cell)?;
                added += 1;
            }
            if added == 0 {
                break;
            }
            debug!("ring expansion attached {added} cells; bind rect {:?}", self.bind);
            self.reposition_all()?;
        }

        self.attach_missing_visible()?;

        self.reposition_all()?;
        self.phase = LayoutPhase::Steady;
        Ok(())
    }

    /// Fill the very first region: columns until one ends past the right
    /// viewport edge, rows until one ends past the bottom edge.
    fn seed_initial_cells(&mut self) -> Result<()> {
        let item_count = self.adapter.item_count();
        let column_count = self.geometry.column_count();
        let viewport_width = i64::from(self.viewport.width);
        let viewport_height = i64::from(self.viewport.height);

        let mut last_row: u32 = 0;
        let mut last_column: u32 = 0;
        for position in 0..item_count {
            let cell = Cell::from_position(position, column_count)?;
            if last_row > 0 && cell.row > last_row {
                break;
            }
            if last_column > 0 && cell.column > last_column {
                continue;
            }
            let rect = self.attach_cell(cell)?;
            if last_column == 0 && rect.right > viewport_width {
                last_column = cell.column;
            }
            if last_row == 0 && rect.bottom > viewport_height {
                last_row = cell.row;
            }
        }
        debug!(
            "seeded {} cells for viewport {}x{}",
            self.attached.len(),
            self.viewport.width,
            self.viewport.height
        );
        Ok(())
    }

    /// Plan the next expansion ring from the current bind rect.
    fn plan_ring(&self) -> Vec<Cell> {
        let Some(bind) = self.bind else {
            return Vec::new();
        };
        let (visible_columns, visible_rows) = self.visible_ranges(bind);
        expansion::plan_next_ring(&expansion::RingInput {
            bind,
            visible_columns,
            visible_rows,
            margin: self.config.preload_margin,
            column_count: self.geometry.column_count(),
            row_count: self.row_count(),
            fix_header: self.config.fix_header,
            fix_column: self.config.fix_column,
        })
    }

    /// Detach and recycle every cell outside the preload margin, honoring
    /// pinned panes, then shrink the bind rect to the evicted boundaries.
    fn evict_invisible_cells(&mut self) {
        let Some(bind) = self.bind else {
            return;
        };
        let (visible_columns, visible_rows) = self.visible_ranges(bind);
        let plan =
            eviction::plan_eviction(bind, visible_columns, visible_rows, self.config.preload_margin);

        let fix_header = self.config.fix_header;
        let fix_column = self.config.fix_column;
        let previous = mem::take(&mut self.attached);
        let mut recycled = 0usize;
        for entry in previous {
            let candidate = plan.cells.contains(&entry.cell)
                || eviction::pinned_candidate(entry.cell, fix_header, fix_column);
            if candidate && !eviction::retained_by_pin(entry.cell, bind, fix_header, fix_column) {
                let AttachedCell { mut view, .. } = entry;
                self.surface.detach(&mut view);
                self.surface.recycle(view);
                recycled += 1;
            } else {
                self.attached.push(entry);
            }
        }
        if recycled > 0 {
            debug!("evicted {recycled} cells; bind rect {:?}", plan.rect);
        }
        self.bind = Some(plan.rect);
    }

    /// Attach any cell of the strictly-visible set (plus pinned cells) that
    /// is somehow missing after the ring loop reached its fixed point.
    fn attach_missing_visible(&mut self) -> Result<()> {
        let Some(bind) = self.bind else {
            return Ok(());
        };
        let (visible_columns, visible_rows) = self.visible_ranges(bind);

        let mut wanted: BTreeSet<Cell> = BTreeSet::new();
        for row in visible_rows.0..=visible_rows.1 {
            for column in visible_columns.0..=visible_columns.1 {
                wanted.insert(Cell::new(row, column));
                if visible_rows.0 > 0 && self.config.fix_header {
                    wanted.insert(Cell::new(0, column));
                }
            }
            if visible_columns.0 > 0 && self.config.fix_column {
                wanted.insert(Cell::new(row, 0));
            }
        }
        if self.config.fix_header && self.config.fix_column {
            wanted.insert(Cell::new(0, 0));
        }

        let item_count = self.adapter.item_count();
        let column_count = self.geometry.column_count();
        let mut added = 0usize;
        for cell in wanted {
            if self.is_attached(cell) || cell.to_position(column_count) >= item_count {
                continue;
            }
            self.attach_cell(cell)?;
            added += 1;
        }
        if added > 0 {
            debug!("re-attached {added} missing visible cells");
            self.reposition_all()?;
        }
        Ok(())
    }

    /// Issue, bind, measure, anchor, and place the view for one cell.
    fn attach_cell(&mut self, cell: Cell) -> Result<PixelRect> {
        let column_count = self.geometry.column_count();
        let position = cell.to_position(column_count);
        let mut view = self.surface.view_for_position(position);
        if let Err(err) = self.adapter.bind(&mut view, cell) {
            self.surface.recycle(view);
            return Err(err);
        }
        self.surface.attach(&mut view);

        let measured = self.surface.measure(&view);
        self.geometry.record_measurement(cell, measured);
        let size = self.geometry.cell_size(cell)?;

        let anchor = placer::resolve_anchor(
            cell,
            column_count,
            self.row_count(),
            self.attached.iter().map(|entry| (entry.cell, &entry.rect)),
        )
        .unwrap_or_else(|| placer::AnchorRegion::LeftTop {
            // No placed neighbor yet: position provisionally from prefix
            // sums; the end-of-round reposition pass is authoritative.
            x: self.offset_x + self.geometry.prefix_x(cell.column),
            y: self.offset_y + self.geometry.prefix_y(cell.row),
        });
        let rect = placer::place(anchor, size);
        self.surface.place(&mut view, rect);
        trace!("attached cell ({}, {}) at {rect:?}", cell.row, cell.column);

        match &mut self.bind {
            Some(bind) => bind.expand_to(cell),
            None => self.bind = Some(BindRect::for_cell(cell)),
        }
        self.attached.push(AttachedCell { cell, rect, view });
        Ok(rect)
    }

    /// Recompute every attached cell's rect from the current geometry and
    /// scroll offset, clamping pinned panes to the viewport edge, and push
    /// changed rects to the surface.
    fn reposition_all(&mut self) -> Result<()> {
        let Self {
            surface,
            geometry,
            config,
            attached,
            offset_x,
            offset_y,
            ..
        } = self;
        for entry in attached.iter_mut() {
            let size = geometry.cell_size(entry.cell)?;
            let x = if config.fix_column && entry.cell.column == 0 {
                0
            } else {
                *offset_x + geometry.prefix_x(entry.cell.column)
            };
            let y = if config.fix_header && entry.cell.row == 0 {
                0
            } else {
                *offset_y + geometry.prefix_y(entry.cell.row)
            };
            let rect = PixelRect::new(x, y, x + i64::from(size.width), y + i64::from(size.height));
            if rect != entry.rect {
                entry.rect = rect;
                surface.place(&mut entry.view, rect);
            }
        }
        Ok(())
    }

    /// Visible ranges for the current offsets, defaulting to the bind rect
    /// edges where geometry is still unmeasured.
    fn visible_ranges(&self, fallback: BindRect) -> ((u32, u32), (u32, u32)) {
        let columns = viewport::visible_columns(
            &self.geometry,
            self.offset_x,
            i64::from(self.viewport.width),
            (fallback.left, fallback.right),
        );
        let rows = viewport::visible_rows(
            &self.geometry,
            self.offset_y,
            i64::from(self.viewport.height),
            (fallback.top, fallback.bottom),
        );
        (columns, rows)
    }

    /// Current table row count, derived from the adapter's item count.
    fn row_count(&self) -> u32 {
        let columns = u64::from(self.geometry.column_count());
        if columns == 0 {
            return 0;
        }
        u32::try_from(self.adapter.item_count().div_ceil(columns)).unwrap_or(u32::MAX)
    }

    /// Detach and recycle everything.
    fn detach_all(&mut self) {
        let previous = mem::take(&mut self.attached);
        for entry in previous {
            let AttachedCell { mut view, .. } = entry;
            self.surface.detach(&mut view);
            self.surface.recycle(view);
        }
        self.bind = None;
    }
}
