//! Hooks for watching a run.

use crate::{GraphStreamItem, GraphStreamState, Phase};

/// Callbacks invoked by [`GraphStream::run`][crate::GraphStream::run].
///
/// Every method defaults to a no-op.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl GrowthObserver for Progress {
///     fn on_op(&mut self, item: &GraphStreamItem) {
///         eprintln!("{} ({} edges left)", item.op, item.progress.edges_left);
///     }
/// }
/// ```
pub trait GrowthObserver {
    /// The state machine entered `phase`.  Fires once per change, including
    /// the final `Done`.
    fn on_phase(&mut self, _phase: Phase) {}

    /// An operation was applied to the graph.
    fn on_op(&mut self, _item: &GraphStreamItem) {}

    /// The run completed; called once with the final progress.
    fn on_finish(&mut self, _progress: &GraphStreamState) {}
}

pub struct NoopObserver;

impl GrowthObserver for NoopObserver {}
