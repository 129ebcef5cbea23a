//! Application configuration from CLI arguments and the launch environment.

use std::num::NonZeroUsize;

use clap::Parser;

use sievecalc_core::constants::WORKERS_ENV_VAR;
use sievecalc_core::{DivisorMode, SieveError, MAX_WORKERS};

/// SieveCalc-rs: find every prime up to N with cooperating workers.
///
/// The worker count is taken from the SIEVECALC_WORKERS environment
/// variable (default: available parallelism). Primes are written to
/// <N>.txt in the current directory.
#[derive(Parser, Debug)]
#[command(name = "sievecalc", version, about)]
pub struct AppConfig {
    /// Upper bound N, between 2 and 10000000.
    #[arg(value_name = "N", required_unless_present = "completion")]
    pub n: Option<u64>,

    /// Verbose output (per-worker table, progress logging).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (no timing or summary lines).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Divisor strategy: broadcast or redundant.
    #[arg(long, value_name = "MODE", default_value = "broadcast")]
    pub divisors: DivisorMode,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments, leaving error reporting to the caller.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// Worker count from the launch environment.
    pub fn worker_count(&self) -> Result<usize, SieveError> {
        resolve_worker_count(std::env::var(WORKERS_ENV_VAR).ok().as_deref())
    }
}

/// Resolve the worker count from the raw environment value, falling back to
/// the machine's available parallelism when unset.
fn resolve_worker_count(raw: Option<&str>) -> Result<usize, SieveError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(std::thread::available_parallelism()
            .map_or(1, NonZeroUsize::get)
            .min(MAX_WORKERS)),
        Some(value) => match value.parse::<usize>() {
            Ok(count) if (1..=MAX_WORKERS).contains(&count) => Ok(count),
            _ => Err(SieveError::Config(format!(
                "{WORKERS_ENV_VAR} must be an integer between 1 and {MAX_WORKERS}, got {value:?}"
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_count_from_env_value() {
        assert_eq!(resolve_worker_count(Some("4")), Ok(4));
        assert_eq!(resolve_worker_count(Some(" 8 ")), Ok(8));
        assert_eq!(resolve_worker_count(Some("256")), Ok(256));
    }

    #[test]
    fn worker_count_default() {
        let count = resolve_worker_count(None).unwrap();
        assert!((1..=MAX_WORKERS).contains(&count));
        assert_eq!(resolve_worker_count(Some("")).unwrap(), count);
    }

    #[test]
    fn worker_count_rejects_garbage() {
        for raw in ["0", "-1", "four", "257", "1.5"] {
            assert!(
                matches!(resolve_worker_count(Some(raw)), Err(SieveError::Config(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn parse_positional_bound() {
        let config = AppConfig::try_parse_from(["sievecalc", "30"]).unwrap();
        assert_eq!(config.n, Some(30));
        assert_eq!(config.divisors, DivisorMode::Broadcast);
        assert!(!config.verbose && !config.quiet);
    }

    #[test]
    fn parse_divisor_mode() {
        let config =
            AppConfig::try_parse_from(["sievecalc", "--divisors", "redundant", "100"]).unwrap();
        assert_eq!(config.divisors, DivisorMode::Redundant);
        assert!(AppConfig::try_parse_from(["sievecalc", "--divisors", "wheel", "100"]).is_err());
    }

    #[test]
    fn missing_or_extra_bound_is_rejected() {
        assert!(AppConfig::try_parse_from(["sievecalc"]).is_err());
        assert!(AppConfig::try_parse_from(["sievecalc", "30", "40"]).is_err());
        assert!(AppConfig::try_parse_from(["sievecalc", "thirty"]).is_err());
    }

    #[test]
    fn completion_needs_no_bound() {
        let config = AppConfig::try_parse_from(["sievecalc", "--completion", "bash"]).unwrap();
        assert!(config.n.is_none());
        assert!(config.completion.is_some());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(AppConfig::try_parse_from(["sievecalc", "-q", "-v", "30"]).is_err());
    }
}
