//! Grid layout sizing: how many tiles fit in a viewport.

use crate::geom::Point;

/// Pixel metrics for laying out a tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutMetrics {
    /// Side length of one square cell, in pixels.
    pub cell_size: i32,
    /// Gap between adjacent cells, in pixels.
    pub gap: i32,
    /// Padding around the grid on each side, in pixels.
    pub padding: i32,
}

/// Number of tiles that fit in `viewport` (width, height in pixels).
///
/// Each axis fits `(available - gap) / (cell_size + gap)` tiles, where the
/// available span is the viewport minus padding on both sides, floored at one
/// cell so a tiny viewport still yields a 1×1 grid.
pub fn tiles_that_fit(viewport: Point, metrics: &LayoutMetrics) -> Point {
    let per_tile = metrics.cell_size + metrics.gap;
    let avail_w = (viewport.x - 2 * metrics.padding).max(per_tile);
    let avail_h = (viewport.y - 2 * metrics.padding).max(per_tile);
    Point::new(
        ((avail_w - metrics.gap) / per_tile).max(1),
        ((avail_h - metrics.gap) / per_tile).max(1),
    )
}
