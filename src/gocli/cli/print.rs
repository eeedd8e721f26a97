use colored::Colorize;
use gocli::api::{CmdMessage, CmdResult, MessageLevel};

pub(super) const SUCCESS_LINE: &str = "Project initialized successfully! happy coding :)";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// The closing line of a scaffolding run.
pub(super) fn summary(result: &CmdResult) -> CmdMessage {
    let failed = result.failed_steps();
    match failed.len() {
        0 => CmdMessage::success(SUCCESS_LINE),
        1 => CmdMessage::warning(format!(
            "Project initialized with 1 failed step ({}), see above",
            failed[0].step
        )),
        n => CmdMessage::warning(format!(
            "Project initialized with {} failed steps ({}), see above",
            n,
            failed
                .iter()
                .map(|s| s.step.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gocli::api::Step;

    #[test]
    fn test_summary_success() {
        let mut result = CmdResult::default();
        result.step_done(Step::EnvFile);
        let message = summary(&result);
        assert_eq!(message.level, MessageLevel::Success);
        assert_eq!(message.content, SUCCESS_LINE);
    }

    #[test]
    fn test_summary_single_failure() {
        let mut result = CmdResult::default();
        result.step_done(Step::EnvFile);
        result.step_failed(Step::Tidy, "boom");
        let message = summary(&result);
        assert_eq!(message.level, MessageLevel::Warning);
        assert!(message.content.contains("1 failed step (module tidy)"));
    }

    #[test]
    fn test_summary_lists_failed_steps() {
        let mut result = CmdResult::default();
        result.step_failed(Step::EnvFile, "a");
        result.step_failed(Step::ModuleInit, "b");
        let message = summary(&result);
        assert!(message.content.contains("2 failed steps (.env, module init)"));
    }
}
