//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::debug;

use sievecalc_cli::output::{output_file_name, write_primes_file};
use sievecalc_cli::presenter::CLIResultPresenter;
use sievecalc_core::observers::{LoggingObserver, NoOpObserver};
use sievecalc_core::{ProgressObserver, SieveOptions};
use sievecalc_orchestration::interfaces::ResultPresenter;
use sievecalc_orchestration::orchestrator::execute_sieve_with_observer;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        sievecalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let n = config.n.context("missing upper bound N")?;
    let workers = config.worker_count()?;
    let opts = SieveOptions {
        divisor_mode: config.divisors,
    };
    debug!(n, workers, mode = %opts.divisor_mode, "Starting sieve");

    let observer: Box<dyn ProgressObserver> = if config.verbose {
        Box::new(LoggingObserver::new())
    } else {
        Box::new(NoOpObserver::new())
    };
    let report = execute_sieve_with_observer(n, workers, &opts, observer.as_ref())?;

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    presenter.present_report(&report);

    let path = output_file_name(n);
    write_primes_file(&path, &report.primes)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}
