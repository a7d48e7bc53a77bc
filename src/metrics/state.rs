use std::time::Duration;

use super::Outcome;

/// Running totals for one run.
///
/// Owned by the collector task for the whole run; nothing else reads it
/// until that task has returned it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateState {
    total: u64,
    failed: u64,
    longest: Duration,
    shortest: Option<Duration>,
}

impl AggregateState {
    pub fn record(&mut self, outcome: &Outcome) {
        self.total = self.total.saturating_add(1);
        if !outcome.success {
            self.failed = self.failed.saturating_add(1);
        }
        if let Some(elapsed) = outcome.elapsed {
            self.longest = self.longest.max(elapsed);
            self.shortest = Some(
                self.shortest
                    .map_or(elapsed, |shortest| shortest.min(elapsed)),
            );
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub const fn failed(&self) -> u64 {
        self.failed
    }

    #[must_use]
    pub const fn succeeded(&self) -> u64 {
        self.total.saturating_sub(self.failed)
    }

    #[must_use]
    pub const fn longest(&self) -> Duration {
        self.longest
    }

    /// `None` until the first timed outcome arrives.
    #[must_use]
    pub const fn shortest(&self) -> Option<Duration> {
        self.shortest
    }
}
