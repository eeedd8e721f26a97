//! # API Facade
//!
//! The single entry point for go-cli operations, whatever the client. It holds the
//! pieces every operation needs (the command runner, the target directory and the
//! toolchain program) and dispatches to `commands/*.rs`.
//!
//! The API does no I/O of its own: no prompts, no printing. Callers collect the
//! [`ProjectDescriptor`] first and render the returned [`CmdResult`] themselves.
//!
//! ## Generic Over CommandRunner
//!
//! - Production: `GoCliApi<ProcessRunner>`
//! - Testing: `GoCliApi<RecordingRunner>`

use crate::commands;
use crate::model::ProjectDescriptor;
use crate::runner::CommandRunner;
use crate::templates::Profile;
use std::path::PathBuf;

pub struct GoCliApi<R: CommandRunner> {
    runner: R,
    root: PathBuf,
    toolchain: String,
}

impl<R: CommandRunner> GoCliApi<R> {
    pub fn new(runner: R, root: impl Into<PathBuf>, toolchain: impl Into<String>) -> Self {
        Self {
            runner,
            root: root.into(),
            toolchain: toolchain.into(),
        }
    }

    /// Scaffolds a new project into the API's root directory.
    pub fn init(&mut self, descriptor: &ProjectDescriptor, profile: Profile) -> CmdResult {
        commands::init::run(
            &mut self.runner,
            &self.root,
            &self.toolchain,
            descriptor,
            profile,
        )
    }

    #[cfg(test)]
    fn runner(&self) -> &R {
        &self.runner
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Step, StepOutcome, StepReport};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::recording::RecordingRunner;
    use tempfile::TempDir;

    #[test]
    fn test_init_dispatches_with_root_and_toolchain() {
        let temp = TempDir::new().unwrap();
        let mut api = GoCliApi::new(RecordingRunner::new(), temp.path(), "gotip");

        let result = api.init(&ProjectDescriptor::default(), Profile::Minimal);

        assert!(result.is_success());
        assert_eq!(
            api.runner().command_lines(),
            vec!["gotip mod init app".to_string(), "gotip mod tidy".to_string()]
        );
        assert!(temp.path().join("main.go").is_file());
    }

    #[test]
    fn test_profile_selects_templates() {
        let temp = TempDir::new().unwrap();
        let mut api = GoCliApi::new(RecordingRunner::new(), temp.path(), "go");

        let result = api.init(&ProjectDescriptor::default(), Profile::Full);

        // .env plus the five full-profile sources
        assert_eq!(result.written_files.len(), 6);
    }
}
