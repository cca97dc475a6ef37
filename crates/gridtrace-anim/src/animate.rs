//! The [`Animator`]: drives a search trace at a visible pace.

use std::time::Duration;

use gridtrace_search::trace::Trace;
use gridtrace_search::{SearchEvent, SearchResult};

use crate::context::Context;
use crate::pace::{PACE_BATCH, Pace, batch_delay};
use crate::sink::Sink;

/// Paces a lazy exploration trace into an observable animation.
///
/// Events are delivered to the sink in trace order; once per [`PACE_BATCH`]
/// finalized nodes the animator suspends through the [`Pace`] seam, so the
/// host stays responsive without per-node scheduling overhead. The search
/// itself only advances inside `run`, one atomic step at a time.
pub struct Animator {
    delay: Duration,
    ctx: Context,
}

impl Animator {
    /// Create an animator for a grid with `total_cells` cells.
    pub fn new(total_cells: usize, ctx: Context) -> Self {
        Self {
            delay: batch_delay(total_cells),
            ctx,
        }
    }

    /// The per-batch delay in effect.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Drive `trace` to completion, delivering every event to `sink`.
    ///
    /// Returns the terminal result, or `None` if the context was cancelled —
    /// in which case no further events were delivered and no partial result
    /// exists.
    pub fn run<T, P, S>(&self, mut trace: T, pace: &mut P, sink: &mut S) -> Option<SearchResult>
    where
        T: Trace,
        P: Pace,
        S: Sink,
    {
        while let Some(event) = trace.next() {
            if self.ctx.is_done() {
                return None;
            }
            match event {
                SearchEvent::NodeExplored(p) => {
                    sink.node_explored(p);
                    if trace.nodes_finalized() % PACE_BATCH == 0 {
                        pace.pause(self.delay);
                    }
                }
                SearchEvent::Done(result) => {
                    if result.success {
                        sink.path_found(&result.path);
                    }
                    return Some(result);
                }
            }
        }
        None
    }
}
