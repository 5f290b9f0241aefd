use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, Shell};

/// Run the completion command: write a completion script for the target
/// shell to stdout.
pub fn run(shell: Shell) {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    let mut out = std::io::stdout();
    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, &bin, &mut out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, &bin, &mut out),
        Shell::Fish => generate(shells::Fish, &mut cmd, &bin, &mut out),
        Shell::Powershell => generate(shells::PowerShell, &mut cmd, &bin, &mut out),
    }
}
