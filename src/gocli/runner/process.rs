use super::{CommandOutput, CommandRunner, Invocation};
use crate::error::{GoCliError, Result};
use std::path::Path;
use std::process::Command;

/// Runs commands as child processes of go-cli.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&mut self, dir: &Path, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let command_line = Invocation::new(dir, program, args).command_line();
        log::debug!("running `{}` in {}", command_line, dir.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| GoCliError::Command {
                command: command_line.clone(),
                output: format!("failed to launch: {}", e),
            })?;

        // stdout first, then stderr; the toolchain reports most problems on stderr
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        log::debug!("`{}` exited with {}", command_line, output.status);

        Ok(CommandOutput {
            success: output.status.success(),
            output: combined,
        })
    }
}
