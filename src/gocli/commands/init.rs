//! The scaffolding run.
//!
//! Steps, in order:
//!
//! 1. write `.env`
//! 2. `<toolchain> mod init <module>`, which gates steps 3 and 4
//! 3. render and write each source template of the profile
//! 4. `<toolchain> mod tidy`
//!
//! Every step records its own [`StepReport`]. Files are always truncated before
//! writing, so running twice in the same directory leaves the second run's output.

use crate::commands::{CmdMessage, CmdResult, Step};
use crate::error::{GoCliError, Result};
use crate::model::{ProjectDescriptor, ENV_FILENAME};
use crate::runner::{CommandRunner, Invocation};
use crate::templates::{render_env_file, Profile, SourceTemplate};
use std::fs;
use std::path::{Path, PathBuf};

/// Scaffolds a project into `root`.
pub fn run<R: CommandRunner>(
    runner: &mut R,
    root: &Path,
    toolchain: &str,
    descriptor: &ProjectDescriptor,
    profile: Profile,
) -> CmdResult {
    let mut result = CmdResult::default();
    let module = descriptor.module();

    log::debug!(
        "scaffolding '{}' ({} profile) into {}",
        module,
        profile,
        root.display()
    );

    match write_env_file(root, descriptor) {
        Ok(path) => {
            result.add_message(CmdMessage::info(format!("Created {}", ENV_FILENAME)));
            result.written_files.push(path);
            result.step_done(Step::EnvFile);
        }
        Err(e) => result.step_failed(Step::EnvFile, format!("Error creating .env file: {}", e)),
    }

    if let Err(e) = run_checked(runner, root, toolchain, &["mod", "init", module]) {
        result.step_failed(
            Step::ModuleInit,
            format!("Error initializing go module: {}", e),
        );
        result.add_message(CmdMessage::warning(
            "Skipped source generation: the module could not be initialized",
        ));
        return result;
    }
    result.add_message(CmdMessage::info(format!("Initialized module {}", module)));
    result.step_done(Step::ModuleInit);

    for template in profile.templates() {
        let step = Step::Generate(template.path);
        match generate(root, template, module) {
            Ok(path) => {
                result.add_message(CmdMessage::info(format!("Created {}", template.path)));
                result.written_files.push(path);
                result.step_done(step);
            }
            Err(e) => result.step_failed(
                step,
                format!("Error creating {} file: {}", template.path, e),
            ),
        }
    }

    match run_checked(runner, root, toolchain, &["mod", "tidy"]) {
        Ok(()) => result.step_done(Step::Tidy),
        Err(e) => result.step_failed(Step::Tidy, format!("Error running go mod tidy: {}", e)),
    }

    result
}

fn write_env_file(root: &Path, descriptor: &ProjectDescriptor) -> Result<PathBuf> {
    let contents = render_env_file(descriptor)?;
    write_file(root, ENV_FILENAME, &contents)
}

fn generate(root: &Path, template: &SourceTemplate, module: &str) -> Result<PathBuf> {
    let contents = template.render(module)?;
    write_file(root, template.path, &contents)
}

/// Writes `contents` to `root/relative`, creating parent directories.
fn write_file(root: &Path, relative: &str, contents: &str) -> Result<PathBuf> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, contents)?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}

/// Runs a toolchain command; a non-zero exit becomes an error carrying its output.
fn run_checked<R: CommandRunner>(
    runner: &mut R,
    root: &Path,
    program: &str,
    args: &[&str],
) -> Result<()> {
    let output = runner.run(root, program, args)?;
    if output.success {
        return Ok(());
    }
    Err(GoCliError::Command {
        command: Invocation::new(root, program, args).command_line(),
        output: output.output.trim_end().to_string(),
    })
}
