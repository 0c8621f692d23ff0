//! Core logger types and traits

pub mod config;
pub mod error;
pub mod event;
pub mod fanout;
pub mod field;
pub mod log_level;
pub mod logger;
pub mod sink;
pub mod termination;
pub mod timestamp;

pub use config::{Format, LoggerConfig};
pub use error::{LoggerError, Result, SendError, SendResult};
pub use event::{LogEvent, TIMESTAMP_KEY};
pub use fanout::{MultiEvent, MultiLogger};
pub use field::{Field, FieldEncoder};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use sink::{BufferedSink, MemoryBuffer, Output, SharedWriter};
pub use termination::{TerminationAction, TerminationPolicy, FATAL_EXIT_CODE};
pub use timestamp::TimestampFormat;
