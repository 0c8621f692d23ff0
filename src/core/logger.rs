//! Main logger implementation

use super::config::{Format, LoggerConfig};
use super::event::LogEvent;
use super::fanout::MultiLogger;
use super::log_level::LogLevel;
use super::sink::Output;
use super::termination::TerminationPolicy;
use super::timestamp::TimestampFormat;
use crate::encoders::{ColorMode, JsonLogger, Palette, PrettyLogger};
use std::fmt;

/// The logger facade.
///
/// Each variant decides per call whether an event is live or a no-op,
/// then hands back a [`LogEvent`] for chaining fields.
///
/// # Example
///
/// ```
/// use rust_event_logger::prelude::*;
///
/// let (output, buffer) = Output::memory();
/// let logger = Logger::json(output);
///
/// logger.debug("filtered out").send().unwrap();
/// logger.warn("disk almost full").uint8("percent", 93).send().unwrap();
///
/// assert_eq!(
///     buffer.take_string(),
///     r#"{"msg":"disk almost full","level":"warn","percent":93}"#
/// );
/// ```
#[derive(Debug, Clone)]
pub enum Logger {
    Json(JsonLogger),
    Pretty(PrettyLogger),
    Multi(MultiLogger),
    /// Every event is a no-op
    Nop,
}

impl Logger {
    /// Machine-readable records
    pub fn json(output: Output) -> Self {
        Logger::Json(JsonLogger::new(output))
    }

    /// Human-readable lines prefixed with the time of day
    pub fn pretty(output: Output) -> Self {
        Logger::Pretty(PrettyLogger::new(output))
    }

    /// Human-readable lines prefixed with a severity glyph
    pub fn cli(output: Output) -> Self {
        Logger::Pretty(PrettyLogger::cli(output))
    }

    /// Fan out to every logger in `loggers`
    pub fn multi(loggers: Vec<Logger>) -> Self {
        Logger::Multi(MultiLogger::new(loggers))
    }

    pub fn nop() -> Self {
        Logger::Nop
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Fatal events no longer exit the process
    pub fn no_exit(&mut self) {
        match self {
            Logger::Json(l) => l.no_exit(),
            Logger::Pretty(l) => l.no_exit(),
            Logger::Multi(l) => l.no_exit(),
            Logger::Nop => {}
        }
    }

    /// Panic events no longer raise an abnormal termination
    pub fn no_panic(&mut self) {
        match self {
            Logger::Json(l) => l.no_panic(),
            Logger::Pretty(l) => l.no_panic(),
            Logger::Multi(l) => l.no_panic(),
            Logger::Nop => {}
        }
    }

    /// Change the threshold; on a fan-out logger this applies to every member
    pub fn set_min_level(&mut self, level: LogLevel) {
        match self {
            Logger::Json(l) => l.set_min_level(level),
            Logger::Pretty(l) => l.set_min_level(level),
            Logger::Multi(l) => l.set_min_level(level),
            Logger::Nop => {}
        }
    }

    /// The lowest level that is written; `None` for a logger that writes nothing
    pub fn min_level(&self) -> Option<LogLevel> {
        match self {
            Logger::Json(l) => Some(l.min_level()),
            Logger::Pretty(l) => Some(l.min_level()),
            Logger::Multi(l) => l.min_level(),
            Logger::Nop => None,
        }
    }

    /// The termination policy, if this logger has one
    pub fn policy(&self) -> Option<TerminationPolicy> {
        match self {
            Logger::Json(l) => Some(l.policy()),
            Logger::Pretty(l) => Some(l.policy()),
            Logger::Multi(l) => Some(l.policy()),
            Logger::Nop => None,
        }
    }

    /// Whether an event of `level` would be written anywhere
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        match self {
            Logger::Json(l) => l.is_enabled(level),
            Logger::Pretty(l) => l.is_enabled(level),
            Logger::Multi(l) => l.is_enabled(level),
            Logger::Nop => false,
        }
    }

    /// Start an event of `level`
    pub fn log(&self, level: LogLevel, message: &str) -> LogEvent<'_> {
        match self {
            Logger::Json(l) => l.event(level, message),
            Logger::Pretty(l) => l.event(level, message),
            Logger::Multi(l) => l.event(level, message),
            Logger::Nop => LogEvent::nop(),
        }
    }

    /// Start an event of `level` with a formatted message.
    ///
    /// The message is rendered before the level is checked.
    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) -> LogEvent<'_> {
        let message = fmt::format(args);
        self.log(level, &message)
    }

    pub fn debug(&self, message: &str) -> LogEvent<'_> {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&self, message: &str) -> LogEvent<'_> {
        self.log(LogLevel::Info, message)
    }

    pub fn warn(&self, message: &str) -> LogEvent<'_> {
        self.log(LogLevel::Warn, message)
    }

    pub fn error(&self, message: &str) -> LogEvent<'_> {
        self.log(LogLevel::Error, message)
    }

    /// Sending the event exits the process unless `no_exit` was called
    pub fn fatal(&self, message: &str) -> LogEvent<'_> {
        self.log(LogLevel::Fatal, message)
    }

    /// Sending the event panics unless `no_panic` was called
    pub fn panic(&self, message: &str) -> LogEvent<'_> {
        self.log(LogLevel::Panic, message)
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) -> LogEvent<'_> {
        self.logf(LogLevel::Debug, args)
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) -> LogEvent<'_> {
        self.logf(LogLevel::Info, args)
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) -> LogEvent<'_> {
        self.logf(LogLevel::Warn, args)
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) -> LogEvent<'_> {
        self.logf(LogLevel::Error, args)
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> LogEvent<'_> {
        self.logf(LogLevel::Fatal, args)
    }

    pub fn panicf(&self, args: fmt::Arguments<'_>) -> LogEvent<'_> {
        self.logf(LogLevel::Panic, args)
    }
}

impl From<JsonLogger> for Logger {
    fn from(logger: JsonLogger) -> Self {
        Logger::Json(logger)
    }
}

impl From<PrettyLogger> for Logger {
    fn from(logger: PrettyLogger) -> Self {
        Logger::Pretty(logger)
    }
}

impl From<MultiLogger> for Logger {
    fn from(logger: MultiLogger) -> Self {
        Logger::Multi(logger)
    }
}

/// Builder for creating a configured Logger
///
/// # Example
///
/// ```
/// use rust_event_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .format(Format::Pretty)
///     .output(Output::stderr())
///     .min_level(LogLevel::Debug)
///     .no_exit()
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    output: Output,
}

impl LoggerBuilder {
    /// JSON to stderr at `info`, terminating on fatal and panic events
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            output: Output::Stderr,
        }
    }

    /// Start from an existing configuration
    #[must_use]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    #[must_use]
    pub fn output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.min_level = level;
        self
    }

    #[must_use]
    pub fn no_exit(mut self) -> Self {
        self.config.no_exit = true;
        self
    }

    #[must_use]
    pub fn no_panic(mut self) -> Self {
        self.config.no_panic = true;
        self
    }

    #[must_use]
    pub fn color(mut self, mode: ColorMode) -> Self {
        self.config.color = mode;
        self
    }

    #[must_use]
    pub fn time_format(mut self, format: TimestampFormat) -> Self {
        self.config.time_format = format;
        self
    }

    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.config.palette = palette;
        self
    }

    pub fn build(self) -> Logger {
        self.config.build(self.output)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
