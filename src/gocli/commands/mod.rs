use std::fmt;
use std::path::PathBuf;

pub mod init;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A unit of scaffolding work whose outcome is reported on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    EnvFile,
    ModuleInit,
    /// Generation of one source file, by its path relative to the project root.
    Generate(&'static str),
    Tidy,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::EnvFile => f.write_str(".env"),
            Step::ModuleInit => f.write_str("module init"),
            Step::Generate(path) => f.write_str(path),
            Step::Tidy => f.write_str("module tidy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Done,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    pub outcome: StepOutcome,
}

impl StepReport {
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, StepOutcome::Failed(_))
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub written_files: Vec<PathBuf>,
    pub steps: Vec<StepReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn step_done(&mut self, step: Step) {
        self.steps.push(StepReport {
            step,
            outcome: StepOutcome::Done,
        });
    }

    /// Records a failed step and reports `reason` to the operator.
    pub fn step_failed(&mut self, step: Step, reason: impl Into<String>) {
        let reason = reason.into();
        log::debug!("step '{}' failed", step);
        self.add_message(CmdMessage::error(reason.clone()));
        self.steps.push(StepReport {
            step,
            outcome: StepOutcome::Failed(reason),
        });
    }

    pub fn failed_steps(&self) -> Vec<&StepReport> {
        self.steps.iter().filter(|s| s.is_failed()).collect()
    }

    pub fn is_success(&self) -> bool {
        self.steps.iter().all(|s| !s.is_failed())
    }

    pub fn outcome_of(&self, step: &Step) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|report| &report.step == step)
            .map(|report| &report.outcome)
    }
}
