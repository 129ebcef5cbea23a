//! Shell completion scripts for the `sievecalc` command.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Write the completion script for `shell` to `out`, registered under the
/// command's own name.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    let bin_name = cmd.get_name().to_owned();
    generate(shell, cmd, bin_name, out);
}
