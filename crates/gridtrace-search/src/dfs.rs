//! Depth-first search steps.

use gridtrace_core::Point;

use crate::trace::{SearchTrace, Step};
use crate::traits::Topology;

impl<'a, T: Topology, F: Fn(Point) -> bool> SearchTrace<'a, T, F> {
    /// Finalize the top of the LIFO stack.
    ///
    /// A cell may be pushed several times before it is first popped; stale
    /// pops of an already-finalized cell are skipped without counting.
    /// Predecessors are recorded at push time, so a cell keeps the most
    /// recent pusher — which is always finalized before the cell itself,
    /// keeping the reconstructed path simple. The path found is whatever the
    /// depth-first order reaches first, with no shortest-path guarantee.
    pub(crate) fn dfs_step(&mut self) -> Step {
        let Some(ci) = self.stack.pop() else {
            return Step::Finished(self.finish_no_path());
        };
        if self.closed[ci] {
            return Step::Skip;
        }
        self.closed[ci] = true;
        self.nodes_explored += 1;

        let current = self.point(ci);
        if current == self.end {
            return Step::Finished(self.finish_found(ci));
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.topo.neighbors(current, &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = self.idx(np) else {
                continue;
            };
            if (self.is_obstacle)(np) || self.closed[ni] {
                continue;
            }
            self.parent[ni] = ci;
            self.stack.push(ni);
        }
        self.nbuf = nbuf;

        Step::Explored(current)
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithm::Algorithm;
    use crate::events::SearchEvent;
    use crate::trace::{SearchTrace, run_search};
    use crate::traits::GridTopology;
    use gridtrace_core::Point;

    fn no_obstacles(_: Point) -> bool {
        false
    }

    fn assert_simple_path(path: &[Point]) {
        for pair in path.windows(2) {
            let d = pair[1] - pair[0];
            assert_eq!(d.x.abs() + d.y.abs(), 1, "consecutive cells adjacent");
        }
        let mut seen = std::collections::HashSet::new();
        for &p in path {
            assert!(seen.insert(p), "repeated coordinate {p}");
        }
    }

    #[test]
    fn straight_line_path() {
        let topo = GridTopology::new(5, 1);
        let result = run_search(
            Algorithm::Dfs,
            Point::new(0, 0),
            Point::new(4, 0),
            no_obstacles,
            &topo,
        );
        assert!(result.success);
        assert_eq!(
            result.path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
                Point::new(4, 0),
            ]
        );
        assert_eq!(result.nodes_explored, 5);
    }

    #[test]
    fn branch_order_follows_last_pushed_neighbor() {
        // Neighbors are pushed up, right, down, left; the left branch is on
        // top of the stack, so the walk hugs the left column first.
        let topo = GridTopology::new(3, 3);
        let mut trace = SearchTrace::new(
            Algorithm::Dfs,
            Point::new(0, 0),
            Point::new(2, 2),
            no_obstacles,
            &topo,
        );
        let mut explored = Vec::new();
        let mut done = None;
        for event in trace.by_ref() {
            match event {
                SearchEvent::NodeExplored(p) => explored.push(p),
                SearchEvent::Done(result) => done = Some(result),
            }
        }
        assert_eq!(
            explored,
            vec![Point::new(0, 1), Point::new(0, 2), Point::new(1, 2)]
        );
        let result = done.unwrap();
        assert_eq!(
            result.path,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
        assert_eq!(result.nodes_explored, 5);
    }

    #[test]
    fn path_is_simple_even_when_not_shortest() {
        let topo = GridTopology::new(6, 6);
        let start = Point::new(0, 0);
        let end = Point::new(5, 0);
        let result = run_search(Algorithm::Dfs, start, end, no_obstacles, &topo);
        assert!(result.success);
        assert_eq!(result.path.first(), Some(&start));
        assert_eq!(result.path.last(), Some(&end));
        assert_simple_path(&result.path);
        // Along the top row the shortest route is 6 cells; the depth-first
        // walk detours down the left side first.
        assert!(result.path.len() >= 6);
    }

    #[test]
    fn duplicate_pushes_do_not_inflate_the_count() {
        let topo = GridTopology::new(4, 4);
        let result = run_search(
            Algorithm::Dfs,
            Point::new(0, 0),
            Point::new(3, 3),
            no_obstacles,
            &topo,
        );
        assert!(result.success);
        // At most one finalization per cell.
        assert!(result.nodes_explored <= 16);
        assert_simple_path(&result.path);
    }

    #[test]
    fn walled_off_end_reports_failure() {
        let topo = GridTopology::new(3, 3);
        let wall = |p: Point| p.x == 1;
        let result = run_search(Algorithm::Dfs, Point::new(0, 1), Point::new(2, 1), wall, &topo);
        assert!(!result.success);
        assert_eq!(result.nodes_explored, 3);
    }
}
