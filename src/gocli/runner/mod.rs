//! # External Commands
//!
//! The scaffolder shells out to the Go toolchain twice: `go mod init` and `go mod tidy`.
//! Both go through the [`CommandRunner`] trait so the scaffolder never touches
//! `std::process` directly.
//!
//! ## Implementations
//!
//! - [`process::ProcessRunner`]: spawns the real program and waits for it
//! - [`recording::RecordingRunner`]: records invocations and answers with scripted
//!   results, for tests that must not depend on an installed toolchain
//!
//! A runner only reports what happened. Deciding whether a non-zero exit aborts the
//! run is the scaffolder's job.

use crate::error::Result;
use std::path::{Path, PathBuf};

pub mod process;
pub mod recording;

/// Exit status and combined stdout/stderr of a finished command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub output: String,
}

impl CommandOutput {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
        }
    }

    pub fn failure(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
        }
    }
}

/// One command invocation, as seen by a runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub dir: PathBuf,
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(dir: &Path, program: &str, args: &[&str]) -> Self {
        Self {
            dir: dir.to_path_buf(),
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// The command line as the operator would type it.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs an external program to completion.
///
/// `Err` means the program could not be run at all (e.g. not installed).
/// A program that ran and exited non-zero is `Ok` with `success == false`.
pub trait CommandRunner {
    fn run(&mut self, dir: &Path, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &mut R {
    fn run(&mut self, dir: &Path, program: &str, args: &[&str]) -> Result<CommandOutput> {
        (**self).run(dir, program, args)
    }
}
