//! Run coordination: fan execution units out, join them, drain the collector.
mod plan;


use std::num::NonZeroUsize;
use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{Semaphore, mpsc};
use tokio::time::Instant;
use tracing::{debug, error};

use crate::error::AppResult;
use crate::http::{Executor, RequestSpec};
use crate::metrics::{OUTCOME_CHANNEL_CAPACITY, Outcome, RunResult, setup_outcome_collector};
use crate::shutdown::{ShutdownReceiver, ShutdownSender};

pub use plan::RunPlan;

/// Stages a run moves through, in order. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Init,
    Dispatching,
    AwaitingCompletion,
    DrainingAggregators,
    Finalized,
}

/// Issues every request of the plan at once and summarizes the outcomes.
///
/// Each execution unit reports exactly one [`Outcome`]; a unit whose task
/// dies is reported as failed on its behalf. Elapsed time covers dispatch up
/// to the moment the last unit returned, not the collector drain. When a
/// shutdown sender is given, units still running at shutdown are recorded as
/// cancelled failures.
///
/// # Errors
///
/// Returns an error only when the collector task itself fails.
pub async fn run<E>(
    plan: &RunPlan,
    executor: Arc<E>,
    shutdown_tx: Option<&ShutdownSender>,
) -> AppResult<RunResult>
where
    E: Executor,
{
    let concurrency = plan.concurrency().get();
    debug!(phase = ?RunPhase::Init, concurrency, "Preparing run");
    let (outcome_tx, outcome_rx) = mpsc::channel::<Outcome>(OUTCOME_CHANNEL_CAPACITY);
    let collector = setup_outcome_collector(outcome_rx);
    let in_flight_limit = plan
        .max_in_flight()
        .map_or(concurrency, NonZeroUsize::get)
        .min(Semaphore::MAX_PERMITS);
    let in_flight = Arc::new(Semaphore::new(in_flight_limit));

    debug!(phase = ?RunPhase::Dispatching, concurrency, "Dispatching requests");
    let started = Instant::now();
    let mut units = Vec::with_capacity(concurrency);
    for _ in 0..concurrency {
        let executor = Arc::clone(&executor);
        let spec = Arc::clone(plan.spec());
        let outcome_tx = outcome_tx.clone();
        let in_flight = Arc::clone(&in_flight);
        let shutdown_rx = shutdown_tx.map(ShutdownSender::subscribe);
        units.push(tokio::spawn(async move {
            let outcome =
                execute_unit(executor.as_ref(), &spec, &in_flight, shutdown_rx).await;
            if outcome_tx.send(outcome).await.is_err() {
                error!("Outcome collector stopped before the run finished.");
            }
        }));
    }

    debug!(phase = ?RunPhase::AwaitingCompletion, "Waiting for requests");
    for unit in units {
        if let Err(err) = unit.await {
            error!("Execution unit did not complete: {}", err);
            let outcome = Outcome::unsent(format!("execution unit did not complete: {}", err));
            if outcome_tx.send(outcome).await.is_err() {
                error!("Outcome collector stopped before the run finished.");
            }
        }
    }
    let elapsed = started.elapsed();

    debug!(phase = ?RunPhase::DrainingAggregators, "Draining outcome collector");
    drop(outcome_tx);
    let state = collector.await?;

    let result = RunResult::from_state(&state, elapsed);
    debug!(
        phase = ?RunPhase::Finalized,
        total = result.total,
        failed = result.failed,
        "Run finished"
    );
    Ok(result)
}

async fn execute_unit<E>(
    executor: &E,
    spec: &RequestSpec,
    in_flight: &Semaphore,
    shutdown_rx: Option<ShutdownReceiver>,
) -> Outcome
where
    E: Executor + ?Sized,
{
    let exchange = async {
        let _permit = in_flight.acquire().await.ok();
        executor.execute(spec).await
    };

    tokio::select! {
        () = wait_for_shutdown(shutdown_rx) => Outcome::unsent("cancelled".to_owned()),
        outcome = exchange => outcome,
    }
}

async fn wait_for_shutdown(shutdown_rx: Option<ShutdownReceiver>) {
    if let Some(mut shutdown_rx) = shutdown_rx {
        match shutdown_rx.recv().await {
            // A lagged receiver still means a shutdown was sent.
            Ok(()) | Err(RecvError::Lagged(_)) => return,
            Err(RecvError::Closed) => {}
        }
    }
    // No sender, or it went away without signalling: nothing can cancel this unit.
    std::future::pending::<()>().await;
}
