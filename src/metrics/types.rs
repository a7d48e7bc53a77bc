use std::time::Duration;

use crate::args::SuccessPolicy;

/// Measurement produced by one execution unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Time spent in the exchange; `None` when no exchange was attempted.
    pub elapsed: Option<Duration>,
    pub success: bool,
    /// Present only when a response was obtained.
    pub status: Option<u16>,
    /// Present only when no response was obtained.
    pub error: Option<String>,
}

impl Outcome {
    #[must_use]
    pub const fn response(elapsed: Duration, status: u16, policy: SuccessPolicy) -> Self {
        Self {
            elapsed: Some(elapsed),
            success: policy.classify(Some(status)),
            status: Some(status),
            error: None,
        }
    }

    #[must_use]
    pub const fn transport_failure(elapsed: Duration, error: String) -> Self {
        Self {
            elapsed: Some(elapsed),
            success: false,
            status: None,
            error: Some(error),
        }
    }

    /// A request that never reached the wire: it could not be built, was
    /// cancelled, or its task died. It still counts as issued and failed.
    #[must_use]
    pub const fn unsent(error: String) -> Self {
        Self {
            elapsed: None,
            success: false,
            status: None,
            error: Some(error),
        }
    }
}
