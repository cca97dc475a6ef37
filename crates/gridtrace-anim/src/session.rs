//! The [`VizSession`]: one board's search-and-visualize lifecycle.

use std::fmt;

use gridtrace_core::Board;
use log::info;

use gridtrace_search::{Algorithm, GridTopology, SearchResult, SearchTrace};

use crate::animate::Animator;
use crate::context::Context;
use crate::pace::{Pace, PaceInfo};
use crate::sink::CellMarks;

/// A request rejected before any search work began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// Start or end cell is unset.
    EndpointsUnset,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::EndpointsUnset => f.write_str("start and end cells required"),
        }
    }
}

impl std::error::Error for RequestError {}

/// Orchestrates searches over one board through the clear → search →
/// animate → mark pipeline.
///
/// The session owns the pieces the host would otherwise scatter across
/// globals — the selected algorithm and the mark store — while every search
/// invocation still gets fresh engine state. At most one search runs at a
/// time: `find_path` clears prior marks before starting and blocks until the
/// trace finishes or is cancelled.
pub struct VizSession {
    algorithm: Algorithm,
    marks: CellMarks,
}

impl VizSession {
    /// Create a session for a `width × height` grid, defaulting to A*.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            algorithm: Algorithm::default(),
            marks: CellMarks::new(width, height),
        }
    }

    /// The selected algorithm.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Select an algorithm directly.
    pub fn select(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        info!("pathfinding algorithm set to {algorithm}");
    }

    /// Select an algorithm by name; unrecognized names fall back to A* with
    /// a logged warning. Returns the algorithm now selected.
    pub fn set_algorithm(&mut self, name: &str) -> Algorithm {
        let algorithm = Algorithm::from_name(name);
        self.select(algorithm);
        algorithm
    }

    /// The current mark store.
    #[inline]
    pub fn marks(&self) -> &CellMarks {
        &self.marks
    }

    /// Remove all explored/path marks.
    pub fn clear_marks(&mut self) {
        self.marks.clear();
        info!("path cleared");
    }

    /// Whether the last search left a path on the board.
    pub fn has_path(&self) -> bool {
        self.marks.has_path()
    }

    /// The animation settings that `find_path` would use for `board`.
    pub fn pace_info(&self, board: &Board) -> PaceInfo {
        PaceInfo::for_grid(board.size())
    }

    /// Search `board` with the selected algorithm, animating exploration
    /// into the mark store.
    ///
    /// Rejects with [`RequestError::EndpointsUnset`] before any search work
    /// if either endpoint is missing. Otherwise prior marks are cleared, a
    /// fresh trace is driven through the animator, and on success the path
    /// is marked. Returns `Ok(None)` when `ctx` was cancelled mid-animation;
    /// the marks then hold whatever had been delivered, and no result is
    /// reported.
    pub fn find_path<P: Pace>(
        &mut self,
        board: &Board,
        pace: &mut P,
        ctx: &Context,
    ) -> Result<Option<SearchResult>, RequestError> {
        let (Some(start), Some(end)) = (board.start(), board.end()) else {
            return Err(RequestError::EndpointsUnset);
        };

        // A resized board invalidates the mark store dimensions.
        if self.marks.size() != board.size() {
            self.marks = CellMarks::new(board.width(), board.height());
        }
        self.marks.begin_search(start, end);

        info!(
            "finding path from {start} to {end} using {} ({})",
            self.algorithm,
            self.pace_info(board)
        );

        let topo = GridTopology::new(board.width(), board.height());
        let trace = SearchTrace::new(self.algorithm, start, end, |p| board.is_obstacle(p), &topo);
        let animator = Animator::new(board.total_cells(), ctx.clone());
        let result = animator.run(trace, pace, &mut self.marks);

        match &result {
            Some(r) if r.success => info!(
                "path found: length {}, {} nodes explored",
                r.path.len(),
                r.nodes_explored
            ),
            Some(r) => info!("no path found after {} nodes", r.nodes_explored),
            None => info!("search cancelled"),
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Mark;
    use gridtrace_core::Point;
    use std::time::Duration;

    /// Pace that never sleeps; tests drive the pipeline at full speed.
    struct NoopPace;

    impl Pace for NoopPace {
        fn pause(&mut self, _delay: Duration) {}
    }

    fn corridor_board() -> Board {
        let mut board = Board::new(5, 1);
        board.set_start(Point::new(0, 0));
        board.set_end(Point::new(4, 0));
        board
    }

    #[test]
    fn missing_endpoints_are_rejected_before_searching() {
        let mut session = VizSession::new(5, 1);
        let board = Board::new(5, 1);
        let err = session
            .find_path(&board, &mut NoopPace, &Context::new())
            .unwrap_err();
        assert_eq!(err, RequestError::EndpointsUnset);
        assert_eq!(err.to_string(), "start and end cells required");
        assert_eq!(session.marks().explored_count(), 0);
    }

    #[test]
    fn find_path_marks_exploration_and_path() {
        let mut session = VizSession::new(5, 1);
        let board = corridor_board();
        let result = session
            .find_path(&board, &mut NoopPace, &Context::new())
            .unwrap()
            .unwrap();
        assert!(result.success);
        assert!(session.has_path());
        // Intervening cells end up path-marked; endpoints stay unmarked.
        for x in 1..4 {
            assert_eq!(session.marks().mark_at(Point::new(x, 0)), Mark::Path);
        }
        assert_eq!(session.marks().mark_at(Point::new(0, 0)), Mark::None);
        assert_eq!(session.marks().mark_at(Point::new(4, 0)), Mark::None);
    }

    #[test]
    fn rerun_on_unchanged_board_is_identical() {
        let mut session = VizSession::new(8, 8);
        let mut board = Board::new(8, 8);
        board.set_start(Point::new(0, 0));
        board.set_end(Point::new(7, 7));
        board.add_obstacle(Point::new(3, 3));
        session.set_algorithm("bfs");

        let first = session
            .find_path(&board, &mut NoopPace, &Context::new())
            .unwrap()
            .unwrap();
        let second = session
            .find_path(&board, &mut NoopPace, &Context::new())
            .unwrap()
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_algorithm_name_falls_back_to_astar() {
        let mut session = VizSession::new(4, 4);
        session.set_algorithm("dfs");
        assert_eq!(session.algorithm(), Algorithm::Dfs);
        assert_eq!(session.set_algorithm("simulated-annealing"), Algorithm::AStar);
        assert_eq!(session.algorithm(), Algorithm::AStar);
    }

    #[test]
    fn marks_are_cleared_between_searches() {
        let mut session = VizSession::new(5, 1);
        let mut board = corridor_board();
        session
            .find_path(&board, &mut NoopPace, &Context::new())
            .unwrap();
        assert!(session.has_path());

        // Wall the corridor; the rerun must not leave stale path marks.
        board.add_obstacle(Point::new(2, 0));
        let result = session
            .find_path(&board, &mut NoopPace, &Context::new())
            .unwrap()
            .unwrap();
        assert!(!result.success);
        assert!(!session.has_path());
        // Only the single reachable intervening cell is explored-marked.
        assert_eq!(session.marks().mark_at(Point::new(1, 0)), Mark::Explored);
        assert_eq!(session.marks().mark_at(Point::new(3, 0)), Mark::None);
    }

    #[test]
    fn board_resize_resizes_the_mark_store() {
        let mut session = VizSession::new(5, 1);
        let mut board = corridor_board();
        session
            .find_path(&board, &mut NoopPace, &Context::new())
            .unwrap();

        board.resize(9, 3);
        board.set_start(Point::new(0, 1));
        board.set_end(Point::new(8, 1));
        let result = session
            .find_path(&board, &mut NoopPace, &Context::new())
            .unwrap()
            .unwrap();
        assert!(result.success);
        assert_eq!(session.marks().size(), Point::new(9, 3));
    }

    #[test]
    fn cancelled_search_reports_no_result() {
        let mut session = VizSession::new(6, 6);
        let mut board = Board::new(6, 6);
        board.set_start(Point::new(0, 0));
        board.set_end(Point::new(5, 5));

        let ctx = Context::new();
        ctx.cancel();
        let result = session.find_path(&board, &mut NoopPace, &ctx).unwrap();
        assert_eq!(result, None);
        assert!(!session.has_path());
    }
}
