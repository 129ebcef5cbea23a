//! Divisor oracle: trial-division primality for candidate divisors.
//!
//! Candidates never exceed `sqrt(N)`, so the naive `O(sqrt(i))` test keeps
//! the total oracle cost at `O(N^0.75)`, well below the sieve work.

use std::ops::RangeInclusive;

/// Integer square root: the largest `r` with `r * r <= n`.
///
/// # Example
/// ```
/// use sievecalc_core::oracle::isqrt;
///
/// assert_eq!(isqrt(30), 5);
/// assert_eq!(isqrt(36), 6);
/// ```
#[must_use]
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    // Newton iteration from above; n / 2 + 1 >= sqrt(n) for n >= 2.
    let mut x = n / 2 + 1;
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Candidate divisors for a bound `n`: `2..=isqrt(n)`.
#[must_use]
pub fn divisor_candidates(n: u64) -> RangeInclusive<u64> {
    2..=isqrt(n)
}

/// Number of sieve iterations (and broadcasts) for bound `n`.
#[must_use]
pub fn iteration_count(n: u64) -> u64 {
    isqrt(n).saturating_sub(1)
}

/// Whether `i` is prime, by trial division against every `j` in `2..=isqrt(i)`.
#[must_use]
pub fn is_prime_divisor(i: u64) -> bool {
    if i < 2 {
        return false;
    }
    (2..=isqrt(i)).all(|j| i % j != 0)
}
