use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoCliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Command `{command}` failed: {output}")]
    Command { command: String, output: String },
}

pub type Result<T> = std::result::Result<T, GoCliError>;
