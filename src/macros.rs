//! Logging macros for formatted messages.
//!
//! Each macro starts an event with a `format!`-style message and returns
//! the [`LogEvent`](crate::LogEvent), so fields can still be chained before
//! it is sent.
//!
//! # Examples
//!
//! ```
//! use rust_event_logger::prelude::*;
//! use rust_event_logger::info;
//!
//! let (output, buffer) = Output::memory();
//! let logger = Logger::json(output);
//!
//! let port = 8080;
//! info!(logger, "listening on port {}", port).str("host", "localhost").send().unwrap();
//!
//! assert_eq!(
//!     buffer.take_string(),
//!     r#"{"msg":"listening on port 8080","level":"info","host":"localhost"}"#
//! );
//! ```

/// Start an event at an explicit level.
///
/// ```
/// # use rust_event_logger::prelude::*;
/// # let logger = Logger::nop();
/// use rust_event_logger::log;
/// log!(logger, LogLevel::Error, "error code: {}", 500).send().unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Start a debug-level event.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Start an info-level event.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Start a warn-level event.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Start an error-level event.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Start a fatal-level event.
///
/// Sending it exits the process unless the logger was told `no_exit`.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Start a panic-level event.
///
/// Named to avoid clashing with `std::panic!`.
#[macro_export]
macro_rules! panic_event {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Panic, $($arg)+)
    };
}
