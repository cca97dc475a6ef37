//! A* search steps.

use gridtrace_core::Point;

use crate::distance::manhattan;
use crate::frontier::take_first_min;
use crate::trace::{SearchTrace, Step};
use crate::traits::Topology;

impl<'a, T: Topology, F: Fn(Point) -> bool> SearchTrace<'a, T, F> {
    /// Finalize the open node with the lowest `f = g + h`; the first minimal
    /// entry in insertion order wins ties.
    pub(crate) fn astar_step(&mut self) -> Step {
        let fscore = &self.fscore;
        let Some(ci) = take_first_min(&mut self.open, |i| fscore[i]) else {
            return Step::Finished(self.finish_no_path());
        };
        self.closed[ci] = true;
        self.nodes_explored += 1;

        let current = self.point(ci);
        if current == self.end {
            return Step::Finished(self.finish_found(ci));
        }

        // Relax neighbors: accept strictly improving costs only, so the
        // first settled predecessor of equal cost is kept.
        let g = self.cost[ci] + 1;
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
            if !self.open.contains(&ni) {
                self.open.push(ni);
            }
            if g >= self.cost[ni] {
                continue;
            }
            self.cost[ni] = g;
            self.fscore[ni] = g + manhattan(np, self.end);
            self.parent[ni] = ci;
        }
        self.nbuf = nbuf;

        Step::Explored(current)
    }
}
