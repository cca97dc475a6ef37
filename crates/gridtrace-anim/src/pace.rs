//! Pacing policy: how fast the exploration animates.

use std::fmt;
use std::time::Duration;

use gridtrace_core::Point;

/// Finalized nodes between two pacing pauses.
///
/// Pausing happens per batch rather than per node, bounding the number of
/// suspension points while the animation stays visibly staggered.
pub const PACE_BATCH: usize = 5;

/// Delay applied once per batch, from the total cell count.
///
/// Smaller grids get longer delays so the search stays watchable; large
/// grids run nearly flat out.
pub fn batch_delay(total_cells: usize) -> Duration {
    let ms = if total_cells < 100 {
        60
    } else if total_cells < 300 {
        30
    } else if total_cells < 600 {
        15
    } else if total_cells < 1000 {
        5
    } else {
        1
    };
    Duration::from_millis(ms)
}

/// The animator's suspension seam.
///
/// The wall-clock implementation is [`ThreadPace`]; tests substitute a
/// recording one.
pub trait Pace {
    /// Suspend for `delay`.
    fn pause(&mut self, delay: Duration);
}

/// Wall-clock pacing via [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPace;

impl Pace for ThreadPace {
    fn pause(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// The animation settings in effect for a grid, for status displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaceInfo {
    /// Grid dimensions as (width, height).
    pub grid_size: Point,
    /// Total cell count the delay was derived from.
    pub total_cells: usize,
    /// Delay per batch.
    pub delay: Duration,
    /// Finalized nodes per batch.
    pub batch: usize,
}

impl PaceInfo {
    /// Settings for a grid of the given dimensions.
    pub fn for_grid(size: Point) -> Self {
        let total_cells = (size.x.max(0) as usize) * (size.y.max(0) as usize);
        Self {
            grid_size: size,
            total_cells,
            delay: batch_delay(total_cells),
            batch: PACE_BATCH,
        }
    }
}

impl fmt::Display for PaceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} ({} cells), {}ms delay every {} nodes",
            self.grid_size.x,
            self.grid_size.y,
            self.total_cells,
            self.delay.as_millis(),
            self.batch
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_table_boundaries() {
        assert_eq!(batch_delay(0), Duration::from_millis(60));
        assert_eq!(batch_delay(99), Duration::from_millis(60));
        assert_eq!(batch_delay(100), Duration::from_millis(30));
        assert_eq!(batch_delay(299), Duration::from_millis(30));
        assert_eq!(batch_delay(300), Duration::from_millis(15));
        assert_eq!(batch_delay(599), Duration::from_millis(15));
        assert_eq!(batch_delay(600), Duration::from_millis(5));
        assert_eq!(batch_delay(999), Duration::from_millis(5));
        assert_eq!(batch_delay(1000), Duration::from_millis(1));
        assert_eq!(batch_delay(50_000), Duration::from_millis(1));
    }

    #[test]
    fn pace_info_display() {
        let info = PaceInfo::for_grid(Point::new(20, 15));
        assert_eq!(info.total_cells, 300);
        assert_eq!(
            info.to_string(),
            "20x15 (300 cells), 15ms delay every 5 nodes"
        );
    }
}
