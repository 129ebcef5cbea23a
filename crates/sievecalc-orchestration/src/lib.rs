//! # sievecalc-orchestration
//!
//! The per-worker sieve program, the coordinator's result aggregation, and
//! the launcher that runs one worker per thread.

pub mod aggregator;
pub mod interfaces;
pub mod orchestrator;
pub mod worker;

#[cfg(test)]
pub(crate) mod test_support;

pub use interfaces::{ResultPresenter, SieveReport, WorkerSummary};
pub use orchestrator::{execute_sieve, execute_sieve_with_observer};
