use std::sync::OnceLock;

use chrono::Local;
use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    #[default]
    Info,
    Debug,
}

pub struct Logger {
    prefix: Option<String>,
    level: LogLevel,
}

impl Logger {
    fn new(prefix: Option<String>, level: LogLevel) -> Self {
        Self { prefix, level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.level
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        println!("{}", self.format_line(&timestamp, level, message));
    }

    fn format_line(&self, timestamp: &str, level: LogLevel, message: &str) -> String {
        let mut line = format!("[{}]", timestamp);
        if let Some(ref prefix) = self.prefix {
            line.push_str(&format!("[{}]", prefix));
        }
        if level == LogLevel::Debug {
            line.push_str("[debug]");
        }
        line.push(' ');
        line.push_str(message);
        line
    }
}

/// First call wins; later calls are ignored.
pub fn init_logger(prefix: Option<String>, level: LogLevel) {
    LOGGER.get_or_init(|| Logger::new(prefix, level));
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(LogLevel::Info, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

/// Debug lines are dropped silently when the logger is absent, so library
/// code can emit them from tests and benches without setup.
pub fn debug(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(LogLevel::Debug, message);
    }
}

pub fn debug_enabled() -> bool {
    LOGGER
        .get()
        .is_some_and(|logger| logger.enabled(LogLevel::Debug))
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::debug(&format!($($arg)*))
        }
    };
}
