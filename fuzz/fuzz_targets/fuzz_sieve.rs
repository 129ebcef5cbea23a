#![no_main]

use libfuzzer_sys::fuzz_target;

use sievecalc_core::{primes_up_to, DivisorMode, SieveOptions};
use sievecalc_orchestration::execute_sieve;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Capped at 20000 for speed
    let n = 2 + u64::from(u16::from_le_bytes([data[0], data[1]])) % 20_000;
    let workers = 1 + usize::from(data[2] % 12);
    let divisor_mode = if data[3] & 1 == 0 {
        DivisorMode::Broadcast
    } else {
        DivisorMode::Redundant
    };

    let report = execute_sieve(n, workers, &SieveOptions { divisor_mode })
        .expect("valid bound must sieve");
    assert_eq!(report.primes, primes_up_to(n));
});
