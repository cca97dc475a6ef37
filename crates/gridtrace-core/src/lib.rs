//! **gridtrace-core** — foundational types for the *gridtrace* pathfinding
//! visualizer: geometry primitives, the endpoint/obstacle board, and grid
//! layout sizing.
//!
//! Nothing in this crate searches or renders. The board is the reference
//! obstacle/endpoint oracle the search engine consumes through a plain
//! predicate, and layout sizing is pure arithmetic over viewport metrics.

pub mod board;
pub mod geom;
pub mod layout;

pub use board::Board;
pub use geom::{Point, Range, RangeIter};
pub use layout::{LayoutMetrics, tiles_that_fit};
