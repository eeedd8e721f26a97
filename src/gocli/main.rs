//! # go-cli binary
//!
//! The binary only invokes `cli::run()` and turns a top-level error into an exit code.
//! Everything else, including the per-step failures of a scaffolding run, is reported
//! by the CLI layer and ends with exit code 0.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Oops. An error while executing go-cli '{}'", e);
        std::process::exit(1);
    }
}
