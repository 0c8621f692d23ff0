//! Process-wide convenience logger
//!
//! Install a logger once at startup with [`init`]; the free functions then
//! forward to it. Before `init` is called they use a JSON logger on stderr
//! with the default threshold and termination policy.
//!
//! ```no_run
//! use rust_event_logger::prelude::*;
//! use rust_event_logger::global;
//!
//! global::init(Logger::cli(Output::stderr())).unwrap();
//! global::info("service started").str("version", "1.2.0").emit();
//! ```

use crate::core::{LogEvent, LogLevel, Logger, LoggerError, Output, Result};
use std::fmt;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide logger.
///
/// Fails with [`LoggerError::AlreadyInitialized`] if a logger was already
/// installed or the default was already used.
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// The installed logger, or the default one
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(|| Logger::json(Output::Stderr))
}

pub fn log(level: LogLevel, message: &str) -> LogEvent<'static> {
    logger().log(level, message)
}

pub fn logf(level: LogLevel, args: fmt::Arguments<'_>) -> LogEvent<'static> {
    logger().logf(level, args)
}

pub fn debug(message: &str) -> LogEvent<'static> {
    logger().debug(message)
}

pub fn info(message: &str) -> LogEvent<'static> {
    logger().info(message)
}

pub fn warn(message: &str) -> LogEvent<'static> {
    logger().warn(message)
}

pub fn error(message: &str) -> LogEvent<'static> {
    logger().error(message)
}

pub fn fatal(message: &str) -> LogEvent<'static> {
    logger().fatal(message)
}

pub fn panic(message: &str) -> LogEvent<'static> {
    logger().panic(message)
}

pub fn debugf(args: fmt::Arguments<'_>) -> LogEvent<'static> {
    logger().debugf(args)
}

pub fn infof(args: fmt::Arguments<'_>) -> LogEvent<'static> {
    logger().infof(args)
}

pub fn warnf(args: fmt::Arguments<'_>) -> LogEvent<'static> {
    logger().warnf(args)
}

pub fn errorf(args: fmt::Arguments<'_>) -> LogEvent<'static> {
    logger().errorf(args)
}

pub fn fatalf(args: fmt::Arguments<'_>) -> LogEvent<'static> {
    logger().fatalf(args)
}

pub fn panicf(args: fmt::Arguments<'_>) -> LogEvent<'static> {
    logger().panicf(args)
}
