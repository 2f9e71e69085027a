//! Windowing algorithms for the materialized region.
//!
//! This module contains the pure planning layer:
//! - Visible range computation from scroll offsets and accumulated sizes
//! - Anchor resolution and placement for newly materialized cells
//! - Ring expansion beyond the bind rect, bounded by the preload margin
//! - Eviction of cells that left the margin, with pinned-pane exceptions

pub mod eviction;
pub mod expansion;
pub mod placer;
pub mod viewport;

pub use eviction::{plan_eviction, EvictionPlan};
pub use expansion::{plan_next_ring, RingInput};
pub use placer::AnchorRegion;
