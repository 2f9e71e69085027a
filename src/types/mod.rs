//! Plain data types shared across the crate.

mod cell;
mod config;
mod rect;

pub use cell::Cell;
pub use config::{GridConfig, DEFAULT_PRELOAD_MARGIN};
pub use rect::{BindRect, PixelRect};

use serde::{Deserialize, Serialize};

/// Measured size of a cell's view, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellSize {
    /// Measured width.
    pub width: u32,
    /// Measured height.
    pub height: u32,
}

impl CellSize {
    /// Build a size from width and height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Pixel size of the host viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewportSize {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
}

impl ViewportSize {
    /// Build a viewport size from width and height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
