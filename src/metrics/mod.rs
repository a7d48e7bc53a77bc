//! Per-request outcomes, their single-consumer aggregation, and the final run summary.
mod collector;
mod state;
mod summary;
mod types;


pub use collector::{OUTCOME_CHANNEL_CAPACITY, setup_outcome_collector};
pub use state::AggregateState;
pub use summary::RunResult;
pub use types::Outcome;
