use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{error, info, warn};

use crate::args::SuccessPolicy;
use crate::metrics::Outcome;

use super::{RequestSpec, Transport};

/// Performs one request and reports how it went.
///
/// Implementations must always return an [`Outcome`]; failures are part of
/// the outcome, never an early exit.
#[async_trait]
pub trait Executor: Send + Sync + 'static {
    async fn execute(&self, spec: &RequestSpec) -> Outcome;
}

/// Times one exchange over a [`Transport`] and classifies the result.
#[derive(Debug)]
pub struct ExecutionUnit<T> {
    transport: T,
    policy: SuccessPolicy,
    show_body: bool,
}

impl<T: Transport> ExecutionUnit<T> {
    #[must_use]
    pub const fn new(transport: T, policy: SuccessPolicy, show_body: bool) -> Self {
        Self {
            transport,
            policy,
            show_body,
        }
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}

#[async_trait]
impl<T: Transport> Executor for ExecutionUnit<T> {
    async fn execute(&self, spec: &RequestSpec) -> Outcome {
        let request = match self.transport.prepare(spec) {
            Ok(request) => request,
            Err(err) => {
                error!(
                    method = %spec.method(),
                    path = spec.effective_path(),
                    "{}",
                    err
                );
                return Outcome::unsent(err.to_string());
            }
        };

        let start = Instant::now();
        let result = self.transport.send(request).await;
        let elapsed = start.elapsed();

        match result {
            Ok(exchange) => {
                let outcome = Outcome::response(elapsed, exchange.status, self.policy);
                info!(
                    version = ?exchange.version,
                    status = exchange.status,
                    elapsed_secs = elapsed.as_secs_f64(),
                    method = %spec.method(),
                    path = spec.effective_path(),
                    success = outcome.success,
                    "request completed"
                );
                // Classification is settled before the body is touched.
                if self.show_body {
                    match self.transport.read_body(exchange.body).await {
                        Ok(body) => info!(path = spec.effective_path(), "response data: {}", body),
                        Err(err) => warn!(path = spec.effective_path(), "{}", err),
                    }
                }
                outcome
            }
            Err(err) => {
                warn!(
                    elapsed_secs = elapsed.as_secs_f64(),
                    method = %spec.method(),
                    path = spec.effective_path(),
                    "{}",
                    err
                );
                Outcome::transport_failure(elapsed, err.to_string())
            }
        }
    }
}
