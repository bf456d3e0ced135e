//! Shell completion scripts for the `deskcalc` binary.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Name the completion scripts register for.
pub const BIN_NAME: &str = "deskcalc";

/// Write the completion script for `shell` to `out`.
///
/// The script completes the flags of `cmd`, whatever name `cmd` was built
/// with, under [`BIN_NAME`].
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    generate(shell, cmd, BIN_NAME, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, ValueEnum};

    fn calculator_command() -> Command {
        Command::new("calc")
            .arg(Arg::new("keys").long("keys"))
            .arg(Arg::new("recovery-delay").long("recovery-delay"))
    }

    fn script_for(shell: Shell) -> String {
        let mut buf = Vec::new();
        generate_completion(&mut calculator_command(), shell, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_completes_calculator_flags() {
        let script = script_for(Shell::Bash);
        assert!(script.contains(BIN_NAME));
        assert!(script.contains("--recovery-delay"));
        assert!(script.contains("--keys"));
    }

    #[test]
    fn every_shell_produces_a_script() {
        for shell in Shell::value_variants() {
            assert!(!script_for(*shell).is_empty(), "{shell}");
        }
    }
}
