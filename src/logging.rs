/*!
 * Terminal logger for host applications.
 *
 * The library itself only talks to the `log` facade. Hosts that have no logger
 * of their own can install this one to see parse warnings on stderr.
 */

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use crate::app_config::LogLevel;

// @struct: Custom logger implementation
pub struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger, fails if one is already installed
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }

    // @formats: One log line without colour
    fn format_line(now: &str, level: Level, target: &str, args: &std::fmt::Arguments) -> String {
        format!("{} {:<5} [{}] {}", now, level, target, args)
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f").to_string();
            let line = Self::format_line(&now, record.level(), record.target(), record.args());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{}\x1B[0m",
                Self::color_for_level(record.level()),
                line
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the terminal logger at the configured level
pub fn init(level: LogLevel) -> Result<(), SetLoggerError> {
    CustomLogger::init(level.into())
}
