//! Property-based tests across worker counts and divisor modes.

use proptest::prelude::*;

use sievecalc_core::{primes_up_to, DivisorMode, SieveOptions};
use sievecalc_orchestration::execute_sieve;

fn run(n: u64, workers: usize, divisor_mode: DivisorMode) -> Vec<u64> {
    execute_sieve(n, workers, &SieveOptions { divisor_mode })
        .unwrap()
        .primes
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// One worker and many workers produce the same list.
    #[test]
    fn independent_of_worker_count(n in 2u64..30_000, workers in 2usize..16) {
        prop_assert_eq!(
            run(n, 1, DivisorMode::Broadcast),
            run(n, workers, DivisorMode::Broadcast)
        );
    }

    /// Broadcast and redundant divisor modes agree.
    #[test]
    fn modes_agree(n in 2u64..30_000, workers in 1usize..10) {
        prop_assert_eq!(
            run(n, workers, DivisorMode::Broadcast),
            run(n, workers, DivisorMode::Redundant)
        );
    }

    /// Every listed value is prime and every prime is listed.
    #[test]
    fn exactly_the_primes(n in 2u64..10_000, workers in 1usize..8) {
        let primes = run(n, workers, DivisorMode::Broadcast);
        for &p in &primes {
            prop_assert!((2..p).take_while(|d| d * d <= p).all(|d| p % d != 0), "{} is composite", p);
        }
        let expected_count = (2..=n)
            .filter(|&v| (2..v).take_while(|d| d * d <= v).all(|d| v % d != 0))
            .count();
        prop_assert_eq!(primes.len(), expected_count);
    }
}

#[test]
fn base_cases() {
    assert_eq!(run(2, 1, DivisorMode::Broadcast), vec![2]);
    assert_eq!(run(3, 4, DivisorMode::Broadcast), vec![2, 3]);
    assert_eq!(run(4, 4, DivisorMode::Redundant), vec![2, 3]);
    assert_eq!(run(30, 8, DivisorMode::Broadcast), primes_up_to(30));
}
