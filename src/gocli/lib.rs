//! # go-cli Architecture
//!
//! go-cli scaffolds a Go backend service skeleton. It asks a few questions, renders a
//! fixed set of templates into the working directory and lets the Go toolchain
//! initialize and tidy the module.
//!
//! Like any CLI it is tempting to write it as one long `main`. It is instead a small
//! library with a thin CLI client, so that every step can be tested without a terminal
//! and without a Go toolchain installed.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts the operator, prints results   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the command runner and the target directory         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - The scaffolding steps, in order                          │
//! │  - Returns a CmdResult: messages, written files, step log   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Templates (templates/) and Runner (runner/)                │
//! │  - Embedded template text rendered with minijinja           │
//! │  - CommandRunner trait: ProcessRunner, RecordingRunner      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! A scaffolding run never aborts halfway because a single file could not be written.
//! Each step reports its own outcome into the [`commands::CmdResult`] and the run moves
//! on. The only hard dependency is the module initialization: if `go mod init` fails,
//! no source files are generated and `go mod tidy` is not attempted.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Scaffolding steps and result types
//! - [`prompt`]: Line-oriented prompts with defaults
//! - [`model`]: The project descriptor and the `.env` file
//! - [`templates`]: Template registry and profiles
//! - [`runner`]: External command abstraction
//! - [`config`]: Optional user configuration
//! - [`logging`]: Diagnostic logging setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod runner;
pub mod templates;
