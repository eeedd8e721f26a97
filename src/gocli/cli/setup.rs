use clap::{Parser, Subcommand};
use gocli::templates::Profile;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "go-cli", bin_name = "go-cli", version = get_version())]
#[command(
    about = "Go-cli is a tool for setting up initial files for a Go backend project",
    long_about = "Go-cli is a tool for setting up initial files for a Go backend project \
                  which includes go.mod, main.go, .env, routes, config, logger and database setup",
    after_help = "Aliases: go-cli, cli"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print diagnostic logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Initialize a new Go project in the current directory
    Init {
        /// Which skeleton to generate (full, minimal)
        #[arg(long, short)]
        profile: Option<Profile>,
    },
}
