use crate::{CliError, CliResult};

use folio_config::LoggingConfig;

use std::fmt::Display;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, debug};

/// Initialize the global fern logger.
///
/// Logs go to the configured file, or to stderr so stdout stays clean for
/// JSON output. Colours only apply to stderr.
pub fn initialize(logging: &LoggingConfig) -> CliResult<()> {
    let level_filter = *logging.level;
    let log_file = logging.file_path();

    let dispatch = Dispatch::new().level(level_filter);

    let dispatch = match &log_file {
        Some(path) => {
            let file = fern::log_file(path).map_err(|e| CliError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?;

            dispatch
                .format(|out, message, record| write_line(out, record.level(), message, record))
                .chain(file)
        }
        None if logging.colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            dispatch
                .format(move |out, message, record| {
                    write_line(out, colors.color(record.level()), message, record)
                })
                .chain(std::io::stderr())
        }
        None => dispatch
            .format(|out, message, record| write_line(out, record.level(), message, record))
            .chain(std::io::stderr()),
    };

    dispatch.apply().map_err(|e| CliError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match log_file {
        Some(path) => debug!("Logger initialized: level={}, file={}", level_filter, path.display()),
        None => debug!("Logger initialized: level={}, stderr", level_filter),
    }

    Ok(())
}

fn write_line(
    out: FormatCallback,
    level: impl Display,
    message: &std::fmt::Arguments,
    record: &Record,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
