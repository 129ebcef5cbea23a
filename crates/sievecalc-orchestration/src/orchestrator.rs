//! Core orchestration: one thread per worker and report assembly.

use std::thread;
use std::time::Instant;

use tracing::{debug, info, warn};

use sievecalc_comm::{ChannelWorld, Communicator};
use sievecalc_core::observers::NoOpObserver;
use sievecalc_core::{ProgressObserver, SieveError, SieveOptions};

use crate::interfaces::{SieveReport, WorkerSummary};
use crate::worker::{run_worker, WorkerOutcome};

/// Sieve `[2, n]` with `workers` cooperating workers.
pub fn execute_sieve(
    n: u64,
    workers: usize,
    opts: &SieveOptions,
) -> Result<SieveReport, SieveError> {
    execute_sieve_with_observer(n, workers, opts, &NoOpObserver::new())
}

/// Sieve `[2, n]` with `workers` cooperating workers and a progress observer.
///
/// Each worker runs on its own scoped thread with its own endpoint of a
/// [`ChannelWorld`]. The run succeeds only if every worker succeeds; the
/// coordinator's merged primes become the report.
pub fn execute_sieve_with_observer(
    n: u64,
    workers: usize,
    opts: &SieveOptions,
    observer: &dyn ProgressObserver,
) -> Result<SieveReport, SieveError> {
    let start_time = Instant::now();
    let world = ChannelWorld::create(workers)?;

    let outcomes: Vec<Result<WorkerOutcome, SieveError>> = thread::scope(|s| {
        let handles: Vec<_> = world
            .into_iter()
            .map(|comm| {
                let rank = comm.rank();
                let handle = thread::Builder::new()
                    .name(format!("sieve-worker-{rank}"))
                    .spawn_scoped(s, move || run_worker(&comm, n, opts, observer));
                (rank, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(rank, handle)| match handle {
                Ok(handle) => handle
                    .join()
                    .unwrap_or(Err(SieveError::WorkerPanicked { rank })),
                Err(e) => Err(SieveError::Config(format!(
                    "failed to spawn worker {rank}: {e}"
                ))),
            })
            .collect()
    });

    let mut outcomes = settle(outcomes)?;
    let collected = outcomes
        .first_mut()
        .and_then(|coordinator| coordinator.collected.take())
        .ok_or_else(|| SieveError::Transfer("coordinator returned no merged result".into()))?;
    let sieve_elapsed = outcomes[0].sieve_elapsed;
    let summaries = summarize(&outcomes, &collected.counts)?;

    let report = SieveReport {
        n,
        worker_count: workers,
        divisor_mode: opts.divisor_mode,
        primes: collected.primes,
        sieve_elapsed,
        total_elapsed: start_time.elapsed(),
        workers: summaries,
    };

    info!(
        n,
        workers,
        primes = report.prime_count(),
        sieve = ?report.sieve_elapsed,
        total = ?report.total_elapsed,
        "Sieve complete"
    );
    Ok(report)
}

/// Per-worker summaries from the outcomes, in rank order.
///
/// Each worker's own count must agree with what the coordinator received
/// from it.
fn summarize(outcomes: &[WorkerOutcome], counts: &[usize]) -> Result<Vec<WorkerSummary>, SieveError> {
    if outcomes.len() != counts.len() {
        return Err(SieveError::Transfer(format!(
            "collected counts from {} workers, expected {}",
            counts.len(),
            outcomes.len()
        )));
    }
    outcomes
        .iter()
        .zip(counts)
        .map(|(outcome, &received)| {
            if outcome.prime_count == received {
                Ok(WorkerSummary {
                    rank: outcome.rank,
                    range: outcome.range,
                    prime_count: outcome.prime_count,
                })
            } else {
                Err(SieveError::Transfer(format!(
                    "worker {} found {} primes but the coordinator received {received}",
                    outcome.rank, outcome.prime_count
                )))
            }
        })
        .collect()
}

/// Reduce per-worker results to a single verdict for the run.
///
/// When several workers fail, the lowest-ranked error that is not a plain
/// disconnect wins: a disconnect is usually the echo of a peer's failure.
fn settle(
    outcomes: Vec<Result<WorkerOutcome, SieveError>>,
) -> Result<Vec<WorkerOutcome>, SieveError> {
    let mut first_error: Option<SieveError> = None;
    let mut ok = Vec::with_capacity(outcomes.len());

    for outcome in outcomes {
        match outcome {
            Ok(outcome) => ok.push(outcome),
            Err(e) => {
                debug!(error = %e, "Worker failed");
                let replace = match &first_error {
                    None => true,
                    Some(SieveError::Disconnected { .. }) => {
                        !matches!(e, SieveError::Disconnected { .. })
                    }
                    Some(_) => false,
                };
                if replace {
                    first_error = Some(e);
                }
            }
        }
    }

    match first_error {
        Some(e) => {
            if e.is_transfer() {
                warn!(error = %e, "Sieve run aborted");
            }
            Err(e)
        }
        None if ok.is_empty() => Err(SieveError::Config("no workers ran".into())),
        None => Ok(ok),
    }
}
