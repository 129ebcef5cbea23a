//! Orchestration interfaces.

use std::time::Duration;

use sievecalc_core::{DivisorMode, SieveRange};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a completed sieve run.
    fn present_report(&self, report: &SieveReport);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// What a single worker contributed to a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerSummary {
    /// Worker rank.
    pub rank: usize,
    /// Sub-range the worker sieved.
    pub range: SieveRange,
    /// Number of primes the worker found.
    pub prime_count: usize,
}

/// Result of a complete sieve run, assembled on the coordinator.
#[derive(Debug, Clone)]
pub struct SieveReport {
    /// Upper bound.
    pub n: u64,
    /// Number of workers in the world.
    pub worker_count: usize,
    /// Divisor strategy used.
    pub divisor_mode: DivisorMode,
    /// All primes in [2, n], ascending.
    pub primes: Vec<u64>,
    /// Coordinator's sieve and broadcast phase.
    pub sieve_elapsed: Duration,
    /// Whole run including aggregation.
    pub total_elapsed: Duration,
    /// Per-worker breakdown, in rank order.
    pub workers: Vec<WorkerSummary>,
}

impl SieveReport {
    /// Number of primes found.
    #[must_use]
    pub fn prime_count(&self) -> usize {
        self.primes.len()
    }

    /// Largest prime not exceeding `n`.
    #[must_use]
    pub fn largest_prime(&self) -> Option<u64> {
        self.primes.last().copied()
    }
}
