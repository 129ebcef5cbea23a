//! The program every worker runs.
//!
//! All ranks execute the same steps: validate the bound, take their
//! sub-range, walk the candidate divisors in lock-step, and hand their
//! primes to the aggregator. Only the coordinator tests divisors (in
//! broadcast mode), reports progress, and collects results.

use std::time::{Duration, Instant};

use tracing::debug;

use sievecalc_comm::{Communicator, Message};
use sievecalc_core::oracle::{divisor_candidates, is_prime_divisor, iteration_count};
use sievecalc_core::{
    partition, validate_bound, DivisorMode, LocalSieve, ProgressObserver, ProgressUpdate,
    SieveError, SieveOptions, SieveRange, COORDINATOR_RANK,
};

use crate::aggregator::{self, Collected};

/// What one worker produced.
#[derive(Debug, Clone)]
pub struct WorkerOutcome {
    /// Worker rank.
    pub rank: usize,
    /// Sub-range the worker sieved.
    pub range: SieveRange,
    /// Number of primes found in the sub-range.
    pub prime_count: usize,
    /// Time spent in the divisor loop.
    pub sieve_elapsed: Duration,
    /// Merged result; present on the coordinator only.
    pub collected: Option<Collected>,
}

/// Run the sieve program for the worker behind `comm`.
///
/// An out-of-range `n` is rejected by every worker before the first
/// broadcast, so no rank is left waiting on a verdict that never comes.
pub fn run_worker<C: Communicator + ?Sized>(
    comm: &C,
    n: u64,
    opts: &SieveOptions,
    observer: &dyn ProgressObserver,
) -> Result<WorkerOutcome, SieveError> {
    let rank = comm.rank();
    let is_coordinator = rank == COORDINATOR_RANK;
    validate_bound(n)?;

    let started = Instant::now();
    let range = partition(n, comm.size(), rank)?;
    debug!(rank, %range, mode = %opts.divisor_mode, "Worker assigned sub-range");

    let mut sieve = LocalSieve::new(range);
    let total = iteration_count(n);

    for (step, divisor) in (1u64..).zip(divisor_candidates(n)) {
        let is_prime = match opts.divisor_mode {
            DivisorMode::Broadcast => broadcast_verdict(comm, divisor)?,
            DivisorMode::Redundant => is_prime_divisor(divisor),
        };
        if is_prime {
            sieve.mark_multiples(divisor);
        }
        if is_coordinator {
            observer.on_progress(&ProgressUpdate::new(rank, divisor, step, total));
        }
    }

    let sieve_elapsed = started.elapsed();
    if is_coordinator {
        observer.on_progress(&ProgressUpdate::done(rank, total));
    }

    let primes = sieve.into_primes();
    let prime_count = primes.len();
    debug!(rank, prime_count, elapsed = ?sieve_elapsed, "Local sieve finished");

    let collected = if is_coordinator {
        Some(aggregator::collect_primes(comm, primes)?)
    } else {
        aggregator::send_primes(comm, primes)?;
        None
    };

    Ok(WorkerOutcome {
        rank,
        range,
        prime_count,
        sieve_elapsed,
        collected,
    })
}

/// Broadcast the coordinator's verdict for `divisor` and return it on
/// every rank.
fn broadcast_verdict<C: Communicator + ?Sized>(comm: &C, divisor: u64) -> Result<bool, SieveError> {
    let verdict = (comm.rank() == COORDINATOR_RANK).then(|| Message::Verdict {
        divisor,
        is_prime: is_prime_divisor(divisor),
    });
    match comm.broadcast(COORDINATOR_RANK, verdict)? {
        Message::Verdict {
            divisor: received,
            is_prime,
        } if received == divisor => Ok(is_prime),
        other => Err(SieveError::Transfer(format!(
            "expected verdict for divisor {divisor}, got {other}"
        ))),
    }
}
