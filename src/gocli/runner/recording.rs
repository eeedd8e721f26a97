use super::{CommandOutput, CommandRunner, Invocation};
use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;

/// Command runner for tests. Does NOT run anything.
///
/// Every call is recorded. Results are scripted per command line; unscripted commands
/// succeed with empty output.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    invocations: Vec<Invocation>,
    scripted: HashMap<String, CommandOutput>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `command_line` (e.g. `"go mod tidy"`) return `output`.
    pub fn with_result(mut self, command_line: &str, output: CommandOutput) -> Self {
        self.scripted.insert(command_line.to_string(), output);
        self
    }

    /// Makes `command_line` exit non-zero with the given output.
    pub fn failing(self, command_line: &str, output: &str) -> Self {
        self.with_result(command_line, CommandOutput::failure(output))
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.invocations.iter().map(Invocation::command_line).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, dir: &Path, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let invocation = Invocation::new(dir, program, args);
        let result = self
            .scripted
            .get(&invocation.command_line())
            .cloned()
            .unwrap_or_else(|| CommandOutput::success(""));
        self.invocations.push(invocation);
        Ok(result)
    }
}
