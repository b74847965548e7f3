#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};
use std::env;
use std::io::Write;

/// Environment variable holding the log level, e.g. `BATTLESOUP_LOG=debug`.
pub const LOG_ENV: &str = "BATTLESOUP_LOG";

/// Writes records to stderr so stdout stays free for reports.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target().trim_start_matches("battlesoup_ai::");
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "{:<5} [{}] {}", record.level(), target, record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

fn level_from_env() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger with the level taken from `BATTLESOUP_LOG`.
/// Unset or unparsable values mean `warn`. Calling it twice is harmless.
pub fn init_logging() {
    let level = level_from_env();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
