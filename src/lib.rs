//! gridview - virtualized windowing core for large scrollable grids
//!
//! Decides which cells of a two-dimensional grid must exist at any moment,
//! given a scroll position, and recycles the rest:
//! - Materializes only the visible region plus a configurable preload margin
//! - Per-cell measurement with monotonic row/column geometry
//! - Pinned header row and pinned left column
//! - Host-agnostic: rendering goes through the [`RenderSurface`] trait,
//!   data through [`DataAdapter`]
//!
//! # Usage
//!
//! ```ignore
//! let adapter = RowTableAdapter::new(rows)?;
//! let mut view = GridView::new(surface, adapter, GridConfig::default());
//! view.on_layout_pass(ViewportSize::new(800, 600))?;
//! view.on_scroll(120, 0)?;
//! ```

pub mod adapter;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod surface;
pub mod types;
pub mod viewer;

pub use adapter::{BindContent, DataAdapter, RowTableAdapter};
pub use error::{GridError, Result};
pub use geometry::GridGeometry;
pub use surface::RenderSurface;
pub use viewer::{GridView, LayoutPhase};

pub use types::*;

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
