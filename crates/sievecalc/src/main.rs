//! SieveCalc-rs: distributed prime sieve.

use sievecalc_cli::ui::print_error;
use sievecalc_lib::{app, config, errors};

fn main() {
    let config = match config::AppConfig::try_parse_args() {
        Ok(config) => config,
        Err(err) => {
            let code = errors::usage_exit_code(&err);
            let _ = err.print();
            std::process::exit(code);
        }
    };

    // Initialize tracing; RUST_LOG takes precedence over --verbose
    let default_level = if config.verbose { "info" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(err) = app::run(&config) {
        print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
