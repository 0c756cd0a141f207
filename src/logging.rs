//! Stderr logger for the command-line binary.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Log level for a net `-v`/`-q` count. Warnings show by default.
#[must_use]
pub fn level_for(verbosity: i16) -> LevelFilter {
    match verbosity {
        i16::MIN..=-2 => LevelFilter::Off,
        -1 => LevelFilter::Error,
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger at the level implied by `verbosity`.
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init(verbosity: i16) -> Result<(), log::SetLoggerError> {
    let level = level_for(verbosity);
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}

// Plain `log::Log` impl: the slog-based backends are not compatible with `log` 0.4.
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = match record.level() {
            Level::Error | Level::Warn => writeln!(stderr, "{}: {}", record.level(), record.args()),
            _ => writeln!(stderr, "{} [{}] {}", record.level(), record.target(), record.args()),
        };
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
