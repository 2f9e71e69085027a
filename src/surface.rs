//! The rendering-surface capability.
//!
//! The core never draws. It asks the host surface for a view per adapter
//! position, measures it once content is bound, attaches and positions it,
//! and hands it back to the pool on eviction. Any UI toolkit that can do
//! these six things can host the grid.

use crate::types::{CellSize, PixelRect};

/// Host capability for issuing, measuring, and positioning cell views.
///
/// All calls happen synchronously inside a layout or scroll pass; the core
/// assumes exclusive, non-reentrant access for the duration of the call.
pub trait RenderSurface {
    /// Opaque view handle owned by the host.
    type View;

    /// Issue a view for an adapter position, fresh or from the pool.
    fn view_for_position(&mut self, position: u64) -> Self::View;

    /// Measure a view's pixel size. Content must be bound first.
    fn measure(&mut self, view: &Self::View) -> CellSize;

    /// Attach a view to the screen. It has no position until
    /// [`RenderSurface::place`] is called.
    fn attach(&mut self, view: &mut Self::View);

    /// Set or update a view's screen rectangle.
    fn place(&mut self, view: &mut Self::View, rect: PixelRect);

    /// Detach a view from the screen.
    fn detach(&mut self, view: &mut Self::View);

    /// Return a detached view to the pool.
    fn recycle(&mut self, view: Self::View);
}
