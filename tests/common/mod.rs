//! Common test utilities: an instrumented in-memory surface, content
//! adapters, and grid builders shared by the integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use gridview::{
    BindContent, Cell, CellSize, GridConfig, GridView, PixelRect, RenderSurface, RowTableAdapter,
    ViewportSize,
};

/// A fake host view: remembers its bound content size and last placement.
#[derive(Debug, Default)]
pub struct TestView {
    pub position: u64,
    pub size: CellSize,
    pub rect: Option<PixelRect>,
    pub attached: bool,
}

impl BindContent<CellSize> for TestView {
    fn bind_content(&mut self, content: &CellSize) {
        self.size = *content;
    }
}

/// Instrumented surface: pools recycled views and counts every call so
/// tests can assert on the recycling protocol.
#[derive(Debug, Default)]
pub struct TestSurface {
    pub created: usize,
    pub recycled: usize,
    pub place_calls: usize,
    pub pool: Vec<TestView>,
}

impl RenderSurface for TestSurface {
    type View = TestView;

    fn view_for_position(&mut self, position: u64) -> TestView {
        if let Some(mut view) = self.pool.pop() {
            view.position = position;
            view.rect = None;
            return view;
        }
        self.created += 1;
        TestView {
            position,
            ..TestView::default()
        }
    }

    fn measure(&mut self, view: &TestView) -> CellSize {
        view.size
    }

    fn attach(&mut self, view: &mut TestView) {
        view.attached = true;
    }

    fn place(&mut self, view: &mut TestView, rect: PixelRect) {
        self.place_calls += 1;
        view.rect = Some(rect);
    }

    fn detach(&mut self, view: &mut TestView) {
        view.attached = false;
    }

    fn recycle(&mut self, view: TestView) {
        assert!(!view.attached, "view recycled while still attached");
        self.recycled += 1;
        self.pool.push(view);
    }
}

pub type TestGrid = GridView<TestSurface, RowTableAdapter<CellSize>>;

/// Grid over `rows` x `columns` cells of one uniform size.
pub fn uniform_grid(rows: u32, columns: u32, size: CellSize, config: GridConfig) -> TestGrid {
    let data = vec![vec![size; columns as usize]; rows as usize];
    let adapter = RowTableAdapter::new(data).unwrap();
    GridView::new(TestSurface::default(), adapter, config)
}

/// Uniform grid already laid out once for `viewport`.
pub fn laid_out_grid(
    rows: u32,
    columns: u32,
    size: CellSize,
    config: GridConfig,
    viewport: ViewportSize,
) -> TestGrid {
    let mut grid = uniform_grid(rows, columns, size, config);
    grid.on_layout_pass(viewport).unwrap();
    grid
}

/// Screen rect of an attached cell, panicking when it is not materialized.
pub fn rect_of(grid: &TestGrid, row: u32, column: u32) -> PixelRect {
    grid.attached_cells()
        .find(|(cell, _)| *cell == Cell::new(row, column))
        .map(|(_, rect)| rect)
        .unwrap_or_else(|| panic!("cell ({row}, {column}) is not attached"))
}

/// Inclusive `(min, max)` of attached rows and columns.
pub fn attached_extent(grid: &TestGrid) -> ((u32, u32), (u32, u32)) {
    let mut rows = (u32::MAX, 0);
    let mut columns = (u32::MAX, 0);
    for (cell, _) in grid.attached_cells() {
        rows = (rows.0.min(cell.row), rows.1.max(cell.row));
        columns = (columns.0.min(cell.column), columns.1.max(cell.column));
    }
    assert!(grid.attached_count() > 0, "no cells attached");
    (rows, columns)
}
