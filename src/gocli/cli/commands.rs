//! Dispatch and handlers.
//!
//! - `run()`: parses arguments, sets up logging and config, dispatches
//! - `handle_*()`: per-command handlers that prompt, call the API and print

use super::print::{print_messages, summary};
use super::setup::{Cli, Commands};
use clap::Parser;
use gocli::api::GoCliApi;
use gocli::config::GoCliConfig;
use gocli::error::Result;
use gocli::logging;
use gocli::prompt::Prompter;
use gocli::runner::process::ProcessRunner;
use gocli::templates::Profile;
use std::io;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.verbose)?;

    let config = GoCliConfig::load_or_default();

    match cli.command {
        Commands::Init { profile } => handle_init(&config, profile.unwrap_or(config.profile)),
    }
}

fn handle_init(config: &GoCliConfig, profile: Profile) -> Result<()> {
    let root = std::env::current_dir()?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let descriptor = prompter.collect(&config.defaults);
    log::debug!("collected answers for module {}", descriptor.name);

    let mut api = GoCliApi::new(ProcessRunner::new(), root, config.toolchain.as_str());
    let result = api.init(&descriptor, profile);

    print_messages(&result.messages);
    print_messages(&[summary(&result)]);
    Ok(())
}
