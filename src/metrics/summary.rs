use std::time::Duration;

use serde::Serialize;

use super::AggregateState;

/// Final statistics of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub total: u64,
    pub succeeded: u64,
    pub failed: u64,
    /// Percentage of succeeded requests, 0 to 100.
    pub success_rate: f64,
    /// Requests per second over the dispatch phase.
    pub throughput: f64,
    pub longest_secs: f64,
    pub shortest_secs: f64,
    pub elapsed_secs: f64,
}

impl RunResult {
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "Rates are reported as fractional percentages and per-second values"
    )]
    pub fn from_state(state: &AggregateState, elapsed: Duration) -> Self {
        let total = state.total();
        let succeeded = state.succeeded();
        let elapsed_secs = elapsed.as_secs_f64();

        let success_rate = if total > 0 {
            succeeded as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        let throughput = if elapsed_secs > 0.0 {
            total as f64 / elapsed_secs
        } else {
            0.0
        };

        Self {
            total,
            succeeded,
            failed: state.failed(),
            success_rate,
            throughput,
            longest_secs: state.longest().as_secs_f64(),
            shortest_secs: state.shortest().unwrap_or_default().as_secs_f64(),
            elapsed_secs,
        }
    }
}
