//! Breadth-first search steps.

use gridtrace_core::Point;

use crate::trace::{SearchTrace, Step};
use crate::traits::Topology;

impl<'a, T: Topology, F: Fn(Point) -> bool> SearchTrace<'a, T, F> {
    /// Finalize the head of the FIFO queue.
    ///
    /// Discovery marks a cell visited immediately, so every cell enters the
    /// queue at most once and keeps the predecessor that discovered it —
    /// which is what makes the reconstructed path shortest in hop count.
    pub(crate) fn bfs_step(&mut self) -> Step {
        let Some(ci) = self.queue.pop_front() else {
            return Step::Finished(self.finish_no_path());
        };
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
            self.closed[ni] = true;
            self.parent[ni] = ci;
            self.queue.push_back(ni);
        }
        self.nbuf = nbuf;

        Step::Explored(current)
    }
}
