//! Logging
//!
//! Leveled logger handed to the semantic queries through `QueryContext`.

mod console_logger;
mod logger;

pub use console_logger::ConsoleLogger;
pub use logger::{LogLevel, Logger, NullLogger, NULL_LOGGER};
