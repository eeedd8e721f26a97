//! # CLI Layer
//!
//! One possible client of the go-cli library, and the only place that touches the
//! process terminal: it parses arguments, prompts on stdin/stdout, prints step
//! results and decides the exit code.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap, version string
//! - `commands`: Dispatch and per-command handlers
//! - `print`: Colored message and summary output

mod commands;
mod print;
pub mod setup;

pub use commands::run;
