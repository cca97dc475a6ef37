//! **gridtrace-anim** — the step scheduler and visualization boundary of the
//! *gridtrace* pathfinding visualizer.
//!
//! The search engine produces a lazy event trace; this crate turns it into
//! something watchable. The [`Animator`] delivers events to a [`Sink`],
//! suspending once per batch of finalized nodes with a delay picked from the
//! grid size. [`Context`] gives the host coarse-grained cancellation, and
//! [`VizSession`] wraps the whole clear → search → animate → mark pipeline
//! behind one value with an explicit lifecycle.
//!
//! Rendering itself stays external: the [`CellMarks`] store only keys
//! explored/path attributes by coordinate for a host to draw from.

pub mod animate;
pub mod context;
pub mod pace;
pub mod session;
pub mod sink;

pub use animate::Animator;
pub use context::Context;
pub use pace::{PACE_BATCH, Pace, PaceInfo, ThreadPace, batch_delay};
pub use session::{RequestError, VizSession};
pub use sink::{CellMarks, Mark, Sink};
