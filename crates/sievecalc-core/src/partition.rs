//! Range partitioning of [2, N] across workers.
//!
//! Every worker calls [`partition`] with its own index and the shared
//! `(N, worker_count)` pair. The resulting sub-ranges are contiguous,
//! monotonically increasing in worker index, pairwise disjoint, and cover
//! exactly `[2, N]`. The monotonic assignment is what lets the aggregator
//! concatenate worker results without a merge step.

use std::fmt;

use crate::constants::{MAX_N, MIN_N};
use crate::error::SieveError;

/// Inclusive sub-range of integers owned by a single worker.
///
/// `end < start` denotes an empty range, which only occurs when there are
/// more workers than integers in `[2, N]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SieveRange {
    /// First integer owned by the worker.
    pub start: u64,
    /// Last integer owned by the worker (inclusive).
    pub end: u64,
}

impl SieveRange {
    /// Create a new range.
    #[must_use]
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Whether the range owns no integers.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Number of integers in the range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start + 1) as usize
        }
    }

    /// Whether `value` falls inside the range.
    #[must_use]
    pub const fn contains(&self, value: u64) -> bool {
        value >= self.start && value <= self.end
    }
}

impl fmt::Display for SieveRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "(empty)")
        } else {
            write!(f, "[{}, {}]", self.start, self.end)
        }
    }
}

/// Reject bounds outside `[MIN_N, MAX_N]`.
pub fn validate_bound(n: u64) -> Result<(), SieveError> {
    if (MIN_N..=MAX_N).contains(&n) {
        Ok(())
    } else {
        Err(SieveError::OutOfRange { n })
    }
}

/// Compute the sub-range owned by `worker_index` out of `worker_count`.
///
/// The `span = N - 1` integers are split into `worker_count` blocks of
/// `span / worker_count`; the first `span % worker_count` workers receive
/// one extra integer. The last worker's end is pinned to `N`.
pub fn partition(n: u64, worker_count: usize, worker_index: usize) -> Result<SieveRange, SieveError> {
    if n < MIN_N {
        return Err(SieveError::OutOfRange { n });
    }
    if worker_count == 0 {
        return Err(SieveError::Config("worker count must be at least 1".into()));
    }
    if worker_index >= worker_count {
        return Err(SieveError::InvalidRank {
            rank: worker_index,
            size: worker_count,
        });
    }

    let count = worker_count as u64;
    let index = worker_index as u64;

    let span = n - 1;
    let base = span / count;
    let remainder = span % count;

    let mut start = index * base + 2;
    let mut end = start + base - 1;

    if index < remainder {
        start += index;
        end += index + 1;
    } else {
        start += remainder;
        end += remainder;
    }

    if worker_index == worker_count - 1 {
        end = n;
    }

    Ok(SieveRange { start, end })
}

/// Compute every worker's sub-range, in rank order.
pub fn partition_all(n: u64, worker_count: usize) -> Result<Vec<SieveRange>, SieveError> {
    (0..worker_count.max(1))
        .map(|index| partition(n, worker_count, index))
        .collect()
}
