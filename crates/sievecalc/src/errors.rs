//! Error handling and exit codes.

use sievecalc_core::exit_codes;
use sievecalc_core::SieveError;

/// Exit code for a sieve error.
pub fn handle_error(err: &SieveError) -> i32 {
    match err {
        SieveError::OutOfRange { .. } => exit_codes::ERROR_GENERIC,
        SieveError::Config(_) | SieveError::InvalidRank { .. } => exit_codes::ERROR_CONFIG,
        SieveError::Disconnected { .. }
        | SieveError::Transfer(_)
        | SieveError::WorkerPanicked { .. } => exit_codes::ERROR_TRANSFER,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SieveError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

/// Exit code for an argument parsing outcome. Help and version requests
/// succeed; every other parse failure is a usage error.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
            exit_codes::SUCCESS
        }
        _ => exit_codes::ERROR_GENERIC,
    }
}
