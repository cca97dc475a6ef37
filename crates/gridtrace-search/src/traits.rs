//! The topology seam between the search engine and its host grid.

use gridtrace_core::{Point, Range};

/// Grid topology: dimensions plus 4-neighbor adjacency.
///
/// Implementations must append neighbors in up, right, down, left order —
/// frontier tie-breaking and depth-first branch order follow enumeration
/// order, so it is part of the observable contract.
pub trait Topology {
    /// Grid dimensions as (width, height).
    fn size(&self) -> Point;

    /// Append the in-bounds cardinal neighbors of `p` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A plain `width × height` grid rooted at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTopology {
    size: Point,
}

impl GridTopology {
    /// Create a topology for a `width × height` grid.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Point::new(width.max(0), height.max(0)),
        }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.size.x, self.size.y)
    }
}

impl Topology for GridTopology {
    #[inline]
    fn size(&self) -> Point {
        self.size
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let bounds = self.bounds();
        for n in p.neighbors_4() {
            if bounds.contains(n) {
                buf.push(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(topo: &GridTopology, p: Point) -> Vec<Point> {
        let mut buf = Vec::new();
        topo.neighbors(p, &mut buf);
        buf
    }

    #[test]
    fn interior_cell_has_four_neighbors_in_order() {
        let topo = GridTopology::new(5, 5);
        assert_eq!(
            neighbors_of(&topo, Point::new(2, 2)),
            vec![
                Point::new(2, 1), // up
                Point::new(3, 2), // right
                Point::new(2, 3), // down
                Point::new(1, 2), // left
            ]
        );
    }

    #[test]
    fn corner_cell_keeps_relative_order() {
        let topo = GridTopology::new(5, 5);
        // Top-left corner: up and left fall outside, right before down.
        assert_eq!(
            neighbors_of(&topo, Point::new(0, 0)),
            vec![Point::new(1, 0), Point::new(0, 1)]
        );
        // Bottom-right corner: up before left.
        assert_eq!(
            neighbors_of(&topo, Point::new(4, 4)),
            vec![Point::new(4, 3), Point::new(3, 4)]
        );
    }

    #[test]
    fn out_of_bounds_cell_yields_in_bounds_neighbors_only() {
        let topo = GridTopology::new(3, 3);
        // A point just outside still enumerates whichever neighbors land
        // inside; the engine never asks for one, but the answer is sane.
        assert_eq!(neighbors_of(&topo, Point::new(3, 0)), vec![Point::new(2, 0)]);
    }
}
