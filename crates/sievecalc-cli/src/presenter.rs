//! CLI result presenter.

use sievecalc_orchestration::interfaces::{ResultPresenter, SieveReport, WorkerSummary};

use crate::output::{format_duration, format_number};
use crate::ui::{print_error, print_header};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    /// Create a presenter; `quiet` suppresses everything, `verbose` adds the
    /// per-worker table.
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// The sieve-phase timing line.
    #[must_use]
    pub fn timing_line(report: &SieveReport) -> String {
        format!(
            "Time taken: {:.6} seconds",
            report.sieve_elapsed.as_secs_f64()
        )
    }

    /// One row of the per-worker table.
    #[must_use]
    pub fn worker_row(summary: &WorkerSummary) -> String {
        format!(
            "  {:>4}  {:<24} {:>10}",
            summary.rank,
            summary.range.to_string(),
            format_number(summary.prime_count as u64),
        )
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_report(&self, report: &SieveReport) {
        if self.quiet {
            return;
        }

        println!("{}", Self::timing_line(report));
        println!(
            "Primes: {} up to {} ({} workers, {} divisors)",
            format_number(report.prime_count() as u64),
            format_number(report.n),
            report.worker_count,
            report.divisor_mode,
        );

        if self.verbose {
            if let Some(largest) = report.largest_prime() {
                println!("Largest prime: {}", format_number(largest));
            }
            println!("Total duration: {}", format_duration(report.total_elapsed));
            print_header("Workers");
            println!("  {:>4}  {:<24} {:>10}", "rank", "range", "primes");
            println!("{:-<44}", "");
            for summary in &report.workers {
                println!("{}", Self::worker_row(summary));
            }
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
