//! Constants for sieve bounds, topology limits, and exit codes.

/// Smallest accepted upper bound.
pub const MIN_N: u64 = 2;

/// Largest accepted upper bound.
pub const MAX_N: u64 = 10_000_000;

/// Rank of the coordinator worker. Its sub-range is always the lowest.
pub const COORDINATOR_RANK: usize = 0;

/// Maximum number of workers in one sieve world.
///
/// The communicator builds a full mesh of point-to-point channels, so the
/// channel count grows with the square of the worker count.
pub const MAX_WORKERS: usize = 256;

/// Minimum progress change (1%) before reporting an update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.01;

/// Environment variable carrying the worker count chosen by the launcher.
pub const WORKERS_ENV_VAR: &str = "SIEVECALC_WORKERS";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Usage error, out-of-range bound, or I/O failure.
    pub const ERROR_GENERIC: i32 = 1;
    /// A peer disconnected or sent a malformed message during the run.
    pub const ERROR_TRANSFER: i32 = 3;
    /// Invalid configuration (worker count).
    pub const ERROR_CONFIG: i32 = 4;
}
