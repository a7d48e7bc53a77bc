use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::args::TesterArgs;
use crate::error::{AppResult, ValidationError};
use crate::http::RequestSpec;

/// Validated input of one run.
#[derive(Debug, Clone)]
pub struct RunPlan {
    spec: Arc<RequestSpec>,
    concurrency: NonZeroUsize,
    max_in_flight: Option<NonZeroUsize>,
}

impl RunPlan {
    /// # Errors
    ///
    /// Returns a validation error when `concurrency` is below 1 or does not
    /// fit the platform's task count.
    pub fn new(spec: RequestSpec, concurrency: u64) -> Result<Self, ValidationError> {
        Ok(Self {
            spec: Arc::new(spec),
            concurrency: validate_concurrency(concurrency)?,
            max_in_flight: None,
        })
    }

    /// Builds the plan from CLI/config arguments. Concurrency is checked
    /// before the target.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad concurrency, URL, method or header.
    pub fn from_args(args: &TesterArgs) -> AppResult<Self> {
        let concurrency = validate_concurrency(args.concurrency)?;
        let spec = RequestSpec::from_args(args)?;
        Ok(Self {
            spec: Arc::new(spec),
            concurrency,
            max_in_flight: args.max_in_flight,
        })
    }

    /// Caps how many exchanges may be in flight at once.
    #[must_use]
    pub fn with_max_in_flight(mut self, max_in_flight: Option<NonZeroUsize>) -> Self {
        self.max_in_flight = max_in_flight;
        self
    }

    #[must_use]
    pub const fn spec(&self) -> &Arc<RequestSpec> {
        &self.spec
    }

    #[must_use]
    pub const fn concurrency(&self) -> NonZeroUsize {
        self.concurrency
    }

    #[must_use]
    pub const fn max_in_flight(&self) -> Option<NonZeroUsize> {
        self.max_in_flight
    }
}

fn validate_concurrency(value: u64) -> Result<NonZeroUsize, ValidationError> {
    let count = usize::try_from(value).map_err(|_err| ValidationError::ConcurrencyTooLarge { value })?;
    NonZeroUsize::new(count).ok_or(ValidationError::ConcurrencyTooSmall { value })
}
