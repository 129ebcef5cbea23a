//! Workspace-level integration tests for sievecalc.
//!
//! The test suites live under `tests/`; this crate has no public items.
