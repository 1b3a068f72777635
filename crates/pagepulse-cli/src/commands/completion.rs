use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io;

/// Write a completion script for `shell` to stdout, named after the
/// `pagepulse` binary so it can be sourced straight into a profile.
pub fn execute(shell: Shell, cmd: &mut Command) -> Result<()> {
    tracing::debug!("Generating completion script for {}", shell);

    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, &mut io::stdout());

    Ok(())
}
