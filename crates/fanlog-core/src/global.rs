//! Process-wide logger
//!
//! Hosts that don't want to thread a [`Logger`] through every call site can
//! install one here and emit through the level macros. A single coarse lock
//! guards the logger for the duration of each call.

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::error::Result;
use crate::format::FormatArg;
use crate::level::LogLevel;
use crate::logger::{EmitReport, Logger};

static GLOBAL: Lazy<Mutex<Logger>> = Lazy::new(|| Mutex::new(Logger::new()));

/// Replace the process-wide logger, returning the previous one.
pub fn install(logger: Logger) -> Logger {
    std::mem::replace(&mut *GLOBAL.lock(), logger)
}

/// Run `f` against the process-wide logger.
pub fn with_global<F, R>(f: F) -> R
where
    F: FnOnce(&mut Logger) -> R,
{
    f(&mut GLOBAL.lock())
}

/// Emit through the process-wide logger.
pub fn emit(level: LogLevel, template: &str, args: &[FormatArg]) -> Result<EmitReport> {
    with_global(|logger| logger.emit(level, template, args))
}

/// Emit a debug message through the process-wide logger
#[macro_export]
macro_rules! log_debug {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::emit($crate::LogLevel::Debug, $template, &$crate::args![$($arg),*])
    };
}

/// Emit an info message through the process-wide logger
#[macro_export]
macro_rules! log_info {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::emit($crate::LogLevel::Info, $template, &$crate::args![$($arg),*])
    };
}

/// Emit a warning message through the process-wide logger
#[macro_export]
macro_rules! log_warn {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::emit($crate::LogLevel::Warning, $template, &$crate::args![$($arg),*])
    };
}

/// Emit an error message through the process-wide logger
#[macro_export]
macro_rules! log_error {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::emit($crate::LogLevel::Error, $template, &$crate::args![$($arg),*])
    };
}
