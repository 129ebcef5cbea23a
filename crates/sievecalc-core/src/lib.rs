//! # sievecalc-core
//!
//! Core building blocks of the distributed prime sieve: range partitioning,
//! the divisor oracle, and the per-worker local sieve. Nothing here knows
//! about message passing; the orchestration crate wires these pieces into
//! the worker program.

pub mod constants;
pub mod error;
pub mod local_sieve;
pub mod observers;
pub mod options;
pub mod oracle;
pub mod partition;
pub mod progress;

// Re-exports
pub use constants::{exit_codes, COORDINATOR_RANK, MAX_N, MAX_WORKERS, MIN_N};
pub use error::SieveError;
pub use local_sieve::LocalSieve;
pub use options::{DivisorMode, SieveOptions};
pub use partition::{partition, partition_all, validate_bound, SieveRange};
pub use progress::{ProgressObserver, ProgressUpdate};

/// Sieve `[2, n]` on the calling thread as a single worker would.
///
/// This is the one-worker rendition of the distributed algorithm and
/// serves as the reference for multi-worker runs.
///
/// # Example
/// ```
/// assert_eq!(sievecalc_core::primes_up_to(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// assert!(sievecalc_core::primes_up_to(1).is_empty());
/// ```
#[must_use]
pub fn primes_up_to(n: u64) -> Vec<u64> {
    if n < MIN_N {
        return Vec::new();
    }
    let mut sieve = LocalSieve::new(SieveRange::new(MIN_N, n));
    for divisor in oracle::divisor_candidates(n) {
        if oracle::is_prime_divisor(divisor) {
            sieve.mark_multiples(divisor);
        }
    }
    sieve.into_primes()
}
