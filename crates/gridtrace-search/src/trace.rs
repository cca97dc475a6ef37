//! The [`SearchTrace`] session: one search invocation as a lazy event stream.

use std::collections::VecDeque;

use gridtrace_core::Point;
use log::debug;

use crate::algorithm::Algorithm;
use crate::distance::manhattan;
use crate::events::{SearchEvent, SearchResult};
use crate::traits::Topology;

/// Sentinel cost for a cell no path has reached yet.
pub const UNREACHABLE: i32 = i32::MAX;

/// Sentinel predecessor for the start of a path.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Outcome of finalizing one node; internal to the step functions.
pub(crate) enum Step {
    /// A node was finalized.
    Explored(Point),
    /// Nothing was finalized this step (stale frontier entry).
    Skip,
    /// The search is over.
    Finished(SearchResult),
}

/// A lazy exploration trace: an in-flight search consumable one event at a
/// time.
///
/// Implemented by [`SearchTrace`]; schedulers use `nodes_finalized` to place
/// pacing pauses on finalization boundaries rather than event boundaries.
pub trait Trace: Iterator<Item = SearchEvent> {
    /// Nodes finalized so far, endpoints included.
    fn nodes_finalized(&self) -> usize;
}

/// One search invocation over an implicit grid graph.
///
/// A trace owns all per-invocation bookkeeping — cost and predecessor arrays
/// keyed by flat cell index, the finalized set, and the frontier collection
/// of whichever algorithm is running. It is single-pass and not restartable:
/// create a fresh trace per search.
///
/// Iterating yields a [`SearchEvent`] per finalized non-endpoint node, in
/// finalize order, followed by exactly one `Done` event; afterwards the
/// iterator is fused. Dropping the trace abandons the search with no further
/// effects.
pub struct SearchTrace<'a, T: Topology, F: Fn(Point) -> bool> {
    pub(crate) algorithm: Algorithm,
    pub(crate) start: Point,
    pub(crate) end: Point,
    pub(crate) is_obstacle: F,
    pub(crate) topo: &'a T,
    pub(crate) width: usize,
    // Flat per-cell bookkeeping, indexed row-major.
    pub(crate) cost: Vec<i32>,
    pub(crate) fscore: Vec<i32>,
    pub(crate) parent: Vec<usize>,
    pub(crate) closed: Vec<bool>,
    // Frontiers; only the running algorithm's is populated.
    pub(crate) open: Vec<usize>,
    pub(crate) unvisited: Vec<usize>,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) stack: Vec<usize>,
    // Scratch buffer for neighbor enumeration.
    pub(crate) nbuf: Vec<Point>,
    pub(crate) nodes_explored: usize,
    pub(crate) finished: bool,
}

impl<'a, T: Topology, F: Fn(Point) -> bool> SearchTrace<'a, T, F> {
    /// Start a search from `start` to `end`.
    ///
    /// The caller guarantees that neither endpoint is an obstacle; the engine
    /// does not re-validate. An out-of-bounds endpoint simply produces an
    /// empty frontier and an immediate no-path result.
    pub fn new(algorithm: Algorithm, start: Point, end: Point, is_obstacle: F, topo: &'a T) -> Self {
        let size = topo.size();
        let width = size.x.max(0) as usize;
        let len = width * size.y.max(0) as usize;

        let mut trace = Self {
            algorithm,
            start,
            end,
            is_obstacle,
            topo,
            width,
            cost: vec![UNREACHABLE; len],
            fscore: vec![UNREACHABLE; len],
            parent: vec![NO_PARENT; len],
            closed: vec![false; len],
            open: Vec::new(),
            unvisited: Vec::new(),
            queue: VecDeque::new(),
            stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
            nodes_explored: 0,
            finished: false,
        };
        debug!("searching from {start} to {end} using {algorithm}");

        match algorithm {
            Algorithm::AStar => {
                if let Some(si) = trace.idx(start) {
                    trace.cost[si] = 0;
                    trace.fscore[si] = manhattan(start, end);
                    trace.open.push(si);
                }
            }
            Algorithm::Dijkstra => {
                // Every cell starts unvisited at distance ∞, except start.
                trace.unvisited = (0..len).collect();
                if let Some(si) = trace.idx(start) {
                    trace.cost[si] = 0;
                }
            }
            Algorithm::Bfs => {
                if let Some(si) = trace.idx(start) {
                    // BFS marks visited on discovery, beginning with start.
                    trace.closed[si] = true;
                    trace.queue.push_back(si);
                }
            }
            Algorithm::Dfs => {
                if let Some(si) = trace.idx(start) {
                    trace.stack.push(si);
                }
            }
        }
        trace
    }

    /// The algorithm this trace is running.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Convert a point to a flat index. `None` if outside the grid.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        let size = self.topo.size();
        if p.x < 0 || p.y < 0 || p.x >= size.x || p.y >= size.y {
            return None;
        }
        Some((p.y as usize) * self.width + (p.x as usize))
    }

    /// Convert a flat index back to a point.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// Finalize one node with the running algorithm.
    fn step(&mut self) -> Step {
        match self.algorithm {
            Algorithm::AStar => self.astar_step(),
            Algorithm::Dijkstra => self.dijkstra_step(),
            Algorithm::Bfs => self.bfs_step(),
            Algorithm::Dfs => self.dfs_step(),
        }
    }

    /// Drain the trace to completion, discarding intermediate events.
    pub fn run(mut self) -> SearchResult {
        loop {
            if let Step::Finished(result) = self.step() {
                return result;
            }
        }
    }

    /// Build the success result by walking predecessor links back from the
    /// finalized end cell.
    pub(crate) fn finish_found(&self, goal: usize) -> SearchResult {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        SearchResult {
            success: true,
            path,
            nodes_explored: self.nodes_explored,
            message: None,
        }
    }

    /// Build the failure result for an exhausted frontier.
    pub(crate) fn finish_no_path(&self) -> SearchResult {
        SearchResult {
            success: false,
            path: Vec::new(),
            nodes_explored: self.nodes_explored,
            message: Some("No path found".to_owned()),
        }
    }
}

impl<'a, T: Topology, F: Fn(Point) -> bool> Iterator for SearchTrace<'a, T, F> {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        if self.finished {
            return None;
        }
        loop {
            match self.step() {
                Step::Skip => {}
                // Endpoints carry fixed styling and are excluded from the
                // visual trace. The end never reaches this arm: finalizing
                // it finishes the search.
                Step::Explored(p) if p == self.start => {}
                Step::Explored(p) => return Some(SearchEvent::NodeExplored(p)),
                Step::Finished(result) => {
                    self.finished = true;
                    return Some(SearchEvent::Done(result));
                }
            }
        }
    }
}

impl<'a, T: Topology, F: Fn(Point) -> bool> Trace for SearchTrace<'a, T, F> {
    #[inline]
    fn nodes_finalized(&self) -> usize {
        self.nodes_explored
    }
}

/// Run a search to completion and return its result.
///
/// Equivalent to draining [`SearchTrace`] without observing the
/// intermediate events.
pub fn run_search<T: Topology, F: Fn(Point) -> bool>(
    algorithm: Algorithm,
    start: Point,
    end: Point,
    is_obstacle: F,
    topo: &T,
) -> SearchResult {
    SearchTrace::new(algorithm, start, end, is_obstacle, topo).run()
}
