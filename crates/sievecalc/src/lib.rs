//! SieveCalc-rs library: application logic for the distributed prime sieve.

pub mod app;
pub mod config;
pub mod errors;
