//! Construction-time configuration for a grid view.

use serde::{Deserialize, Serialize};

/// Number of extra rings of cells kept materialized beyond the visible
/// range when no margin is configured explicitly.
pub const DEFAULT_PRELOAD_MARGIN: u32 = 1;

/// Grid view configuration, fixed for the lifetime of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Keep row 0 visible across vertical scroll.
    pub fix_header: bool,
    /// Keep column 0 visible across horizontal scroll.
    pub fix_column: bool,
    /// Rings of cells kept materialized beyond the strictly visible range.
    pub preload_margin: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            fix_header: false,
            fix_column: false,
            preload_margin: DEFAULT_PRELOAD_MARGIN,
        }
    }
}
