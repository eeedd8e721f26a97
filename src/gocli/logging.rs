use crate::error::{GoCliError, Result};
use fern::colors::{Color, ColoredLevelConfig};
use fern::Dispatch;
use log::LevelFilter;
use std::io::IsTerminal;
use std::time::SystemTime;

/// Level used when `--verbose` is not given.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        DEFAULT_LEVEL
    }
}

/// Initialize diagnostic logging on stderr.
///
/// Operator-facing output (prompts, step results) is printed separately; logs only
/// carry diagnostics, so they go to stderr and stay quiet unless `verbose` is set.
pub fn initialize(verbose: bool) -> Result<()> {
    let level = level_for(verbose);
    let colored = std::io::stderr().is_terminal();

    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    Dispatch::new()
        .level(level)
        .format(move |out, message, record| {
            let level = if colored {
                colors.color(record.level()).to_string()
            } else {
                record.level().to_string()
            };
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = humantime::format_rfc3339_seconds(SystemTime::now()),
                level = level,
                message = message,
            ))
        })
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| {
            GoCliError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to initialize logger: {e}"),
            ))
        })?;

    log::debug!("Logger initialized: level={:?}", level);
    Ok(())
}
