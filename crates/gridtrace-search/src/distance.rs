use gridtrace_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a 4-connected uniform-cost grid this never overestimates the true
/// remaining cost, which is what makes it a sound A* heuristic here.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
