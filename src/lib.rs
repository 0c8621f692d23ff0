//! # Rust Event Logger
//!
//! A structured-event logging facade. Each call to a severity entry point
//! returns a single-use event builder; typed fields are chained onto it and
//! the event is written in one piece when it is sent.
//!
//! ## Features
//!
//! - **Two encodings**: JSON records for machines, colorized lines for humans
//! - **Zero-cost filtering**: events below the threshold or aimed at a
//!   discard output are no-ops
//! - **Fan-out**: one logical logger replicated across several loggers
//! - **Explicit termination**: fatal and panic events report a
//!   [`TerminationAction`] instead of exiting behind the caller's back
//!
//! ## Example
//!
//! ```
//! use rust_event_logger::prelude::*;
//!
//! let (output, buffer) = Output::memory();
//! let logger = Logger::json(output);
//!
//! logger.info("Test").int("n", 1234).send().unwrap();
//! assert_eq!(buffer.take_string(), r#"{"msg":"Test","level":"info","n":1234}"#);
//! ```

pub mod core;
pub mod encoders;
#[cfg(feature = "global")]
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Field, FieldEncoder, Format, LogEvent, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, MemoryBuffer, MultiLogger, Output, Result, SendError, SendResult,
        TerminationAction, TerminationPolicy, TimestampFormat,
    };
    pub use crate::encoders::{ColorMode, JsonLogger, Palette, PrettyLogger, PrettyStyle};
}

pub use crate::core::{
    BufferedSink, Field, FieldEncoder, Format, LogEvent, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, MemoryBuffer, MultiEvent, MultiLogger, Output, Result,
    SendError, SendResult, SharedWriter, TerminationAction, TerminationPolicy, TimestampFormat, FATAL_EXIT_CODE,
    TIMESTAMP_KEY,
};
pub use crate::encoders::{
    ColorMode, JsonEvent, JsonLogger, Palette, PrettyEvent, PrettyLogger, PrettyStyle,
};
