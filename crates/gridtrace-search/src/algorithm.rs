//! Algorithm selection.

use std::fmt;
use std::str::FromStr;

use log::warn;

/// The available search algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// A* with the Manhattan heuristic. Shortest path, directed exploration.
    #[default]
    AStar,
    /// Dijkstra over uniform edge costs. Shortest path, undirected sweep.
    Dijkstra,
    /// Breadth-first search. Shortest path in hop count.
    Bfs,
    /// Depth-first search. Finds *a* path, deliberately not the shortest —
    /// kept for contrast with the optimal algorithms.
    Dfs,
}

impl Algorithm {
    /// Every algorithm, in display order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::AStar,
        Algorithm::Dijkstra,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    /// Canonical lowercase identifier.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::AStar => "astar",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }

    /// Lenient selection: an unrecognized name falls back to A* with a
    /// logged warning rather than failing the caller.
    pub fn from_name(name: &str) -> Algorithm {
        match name.parse() {
            Ok(algorithm) => algorithm,
            Err(UnknownAlgorithm(_)) => {
                warn!("unsupported algorithm {name:?}, using astar instead");
                Algorithm::AStar
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an algorithm identifier that names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm: {:?}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" => Ok(Algorithm::AStar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            _ => Err(UnknownAlgorithm(s.to_owned())),
        }
    }
}
