//! Per-worker sieve table over a single sub-range.
//!
//! Index `i` of the flag table stands for the integer `start + i`. Every flag
//! starts out `true` ("assumed prime") and is cleared when a broadcast prime
//! divisor divides the value. The table is owned by one worker and never
//! shared.

use crate::partition::SieveRange;

/// First multiple of `divisor` that the sieve marks inside a range starting
/// at `start`.
///
/// Below `divisor * divisor` every composite multiple of `divisor` has a
/// smaller prime factor, so marking begins there; a range that starts above
/// the square begins at its first aligned multiple, which is `start` itself
/// when `start` is divisible.
#[must_use]
pub fn first_multiple(start: u64, divisor: u64) -> u64 {
    let square = divisor.saturating_mul(divisor);
    if start > square {
        start + ((divisor - (start % divisor)) % divisor)
    } else {
        square
    }
}

/// Boolean candidacy table for one worker's sub-range.
#[derive(Debug, Clone)]
pub struct LocalSieve {
    range: SieveRange,
    flags: Vec<bool>,
}

impl LocalSieve {
    /// Allocate a table for `range` with every value assumed prime.
    #[must_use]
    pub fn new(range: SieveRange) -> Self {
        Self {
            range,
            flags: vec![true; range.len()],
        }
    }

    /// The sub-range covered by this table.
    #[must_use]
    pub fn range(&self) -> SieveRange {
        self.range
    }

    /// Mark every multiple of `divisor` in the range, from
    /// [`first_multiple`] upward, as composite.
    ///
    /// Returns the number of flags visited. Empty ranges do no work.
    #[allow(clippy::cast_possible_truncation)]
    pub fn mark_multiples(&mut self, divisor: u64) -> usize {
        if self.range.is_empty() || divisor < 2 {
            return 0;
        }
        let SieveRange { start, end } = self.range;
        let first = first_multiple(start, divisor);
        if first > end {
            return 0;
        }

        let mut visited = 0;
        for j in (first..=end).step_by(divisor as usize) {
            if j >= start {
                self.flags[(j - start) as usize] = false;
                visited += 1;
            }
        }
        visited
    }

    /// Whether `value` is still flagged as prime. Values outside the range
    /// are reported as `false`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn is_candidate(&self, value: u64) -> bool {
        self.range.contains(value) && self.flags[(value - self.range.start) as usize]
    }

    /// Number of values still flagged as prime.
    #[must_use]
    pub fn prime_count(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }

    /// Compact the table into an ascending prime list.
    #[must_use]
    pub fn primes(&self) -> Vec<u64> {
        let start = self.range.start;
        self.flags
            .iter()
            .zip(start..)
            .filter_map(|(&flag, value)| flag.then_some(value))
            .collect()
    }

    /// Compact the table into an ascending prime list, releasing the flags.
    #[must_use]
    pub fn into_primes(self) -> Vec<u64> {
        self.primes()
    }
}
