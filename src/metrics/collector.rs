use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

use super::{AggregateState, Outcome};

/// Buffer between execution units and the collector.
pub const OUTCOME_CHANNEL_CAPACITY: usize = 1024;

/// Spawns the task that owns the run's [`AggregateState`].
///
/// The task folds every received outcome into its state and returns it once
/// all senders are gone and the channel is drained. Awaiting the handle is the
/// only way to read the state.
#[must_use]
pub fn setup_outcome_collector(
    mut outcome_rx: mpsc::Receiver<Outcome>,
) -> JoinHandle<AggregateState> {
    tokio::spawn(async move {
        let mut state = AggregateState::default();
        while let Some(outcome) = outcome_rx.recv().await {
            state.record(&outcome);
        }
        debug!(
            total = state.total(),
            failed = state.failed(),
            "Outcome channel drained"
        );
        state
    })
}
