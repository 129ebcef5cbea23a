#![no_main]

use libfuzzer_sys::fuzz_target;

use sievecalc_core::{partition_all, MAX_N, MAX_WORKERS, MIN_N};

fuzz_target!(|data: &[u8]| {
    if data.len() < 6 {
        return;
    }
    // First 4 bytes pick n, next 2 pick the worker count
    let raw = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as u64;
    let n = MIN_N + raw % (MAX_N - MIN_N + 1);
    let workers = 1 + usize::from(u16::from_le_bytes([data[4], data[5]])) % MAX_WORKERS;

    let Ok(ranges) = partition_all(n, workers) else {
        panic!("valid bound {n} rejected");
    };
    assert_eq!(ranges.len(), workers);

    // Ranges must tile [2, n] in rank order
    let mut next = MIN_N;
    for range in ranges.iter().filter(|r| !r.is_empty()) {
        assert_eq!(range.start, next);
        next = range.end + 1;
    }
    assert_eq!(next, n + 1);
});
