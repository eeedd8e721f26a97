//! # Prompts
//!
//! Line-oriented questions with defaults. An empty answer, an unreadable terminal and
//! end of input all mean "use the default", so collection always produces a value.

use crate::config::PromptDefaults;
use crate::model::ProjectDescriptor;
use std::io::{BufRead, Write};

pub const PROJECT_NAME_PROMPT: &str = "Enter the project module name: ";
pub const PORT_PROMPT: &str = "Enter the HTTP port number: ";
pub const DATABASE_URL_PROMPT: &str = "Enter the database connection string: ";

/// Asks questions on `output` and reads answers from `input`, one line each.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Shows `message` and returns the trimmed answer, or `default` if it is empty.
    pub fn ask(&mut self, message: &str, default: &str) -> String {
        // Prompt display is best-effort: a closed stdout must not block input.
        let _ = write!(self.output, "{}", message);
        let _ = self.output.flush();

        let mut line = String::new();
        if let Err(e) = self.input.read_line(&mut line) {
            log::debug!("reading answer failed, using default: {}", e);
            line.clear();
        }

        let answer = line.trim();
        if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        }
    }

    /// Runs the three project questions in order.
    pub fn collect(&mut self, defaults: &PromptDefaults) -> ProjectDescriptor {
        let name = self.ask(PROJECT_NAME_PROMPT, &defaults.project_name);
        let port = self.ask(PORT_PROMPT, &defaults.port);
        let database_url = self.ask(DATABASE_URL_PROMPT, &defaults.database_url);
        ProjectDescriptor::new(name, port, database_url)
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}
