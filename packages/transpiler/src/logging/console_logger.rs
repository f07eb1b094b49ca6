// Console Logger
//
// Writes query traces to stderr, keeping stdout free for emitted code.

use super::logger::{LogLevel, Logger};

/// Stderr logger built from `TranspilerConfig::logger`.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
    level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// `[transpiler] WARN: msg`
    pub fn format_line(level: LogLevel, msg: &str) -> String {
        format!("[transpiler] {}: {}", level, msg)
    }

    fn write(&self, level: LogLevel, msg: &str) {
        if self.is_enabled(level) {
            eprintln!("{}", Self::format_line(level, msg));
        }
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn debug(&self, msg: &str) {
        self.write(LogLevel::Debug, msg);
    }

    fn info(&self, msg: &str) {
        self.write(LogLevel::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.write(LogLevel::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.write(LogLevel::Error, msg);
    }
}
