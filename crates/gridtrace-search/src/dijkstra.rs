//! Dijkstra search steps.

use gridtrace_core::Point;

use crate::frontier::take_first_min;
use crate::trace::{SearchTrace, Step, UNREACHABLE};
use crate::traits::Topology;

impl<'a, T: Topology, F: Fn(Point) -> bool> SearchTrace<'a, T, F> {
    /// Finalize the unvisited cell with the lowest distance, scanning the
    /// whole grid rather than a discovered-only frontier; ties fall to the
    /// earliest cell in row-major seeding order.
    pub(crate) fn dijkstra_step(&mut self) -> Step {
        let cost = &self.cost;
        let Some(ci) = take_first_min(&mut self.unvisited, |i| cost[i]) else {
            return Step::Finished(self.finish_no_path());
        };
        if self.cost[ci] == UNREACHABLE {
            // Every remaining cell is unreachable, so the frontier is
            // effectively exhausted.
            return Step::Finished(self.finish_no_path());
        }
        self.closed[ci] = true;
        self.nodes_explored += 1;

        let current = self.point(ci);
        if current == self.end {
            return Step::Finished(self.finish_found(ci));
        }

        let d = self.cost[ci] + 1;
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
            if d < self.cost[ni] {
                self.cost[ni] = d;
                self.parent[ni] = ci;
            }
        }
        self.nbuf = nbuf;

        Step::Explored(current)
    }
}
