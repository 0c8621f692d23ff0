//! The chainable event builder handed out by every logger
//!
//! Provides a fluent API for appending typed fields to one event before
//! it is sent.

use super::error::{LoggerError, SendError, SendResult};
use super::fanout::MultiEvent;
use super::field::{Field, FieldEncoder};
use super::termination::TerminationAction;
use super::timestamp::TimestampFormat;
use crate::encoders::json::JsonEvent;
use crate::encoders::pretty::PrettyEvent;
use serde::Serialize;
use std::fmt;

/// Key used by [`LogEvent::timestamp`]
pub const TIMESTAMP_KEY: &str = "timestamp";

/// The closed set of event variants
pub(crate) enum EventKind<'a> {
    /// Filtered out or discarded; every call is ignored
    Nop,
    Json(JsonEvent<'a>),
    Pretty(PrettyEvent<'a>),
    Multi(MultiEvent<'a>),
}

impl EventKind<'_> {
    fn termination(&self) -> TerminationAction {
        match self {
            EventKind::Nop => TerminationAction::None,
            EventKind::Json(e) => e.termination().clone(),
            EventKind::Pretty(e) => e.termination().clone(),
            EventKind::Multi(e) => e.termination().clone(),
        }
    }
}

impl FieldEncoder for EventKind<'_> {
    #[inline]
    fn append(&mut self, key: &str, value: Field<'_>) {
        match self {
            EventKind::Nop => {}
            EventKind::Json(e) => e.append(key, value),
            EventKind::Pretty(e) => e.append(key, value),
            EventKind::Multi(e) => e.append(key, value),
        }
    }

    fn append_err(&mut self, err: &dyn std::error::Error) {
        match self {
            EventKind::Nop => {}
            EventKind::Json(e) => e.append_err(err),
            EventKind::Pretty(e) => e.append_err(err),
            EventKind::Multi(e) => e.append_err(err),
        }
    }

    fn finish(self) -> SendResult {
        match self {
            EventKind::Nop => Ok(TerminationAction::None),
            EventKind::Json(e) => e.finish(),
            EventKind::Pretty(e) => e.finish(),
            EventKind::Multi(e) => e.finish(),
        }
    }
}

/// A single-use event builder.
///
/// Every appender consumes the event and returns it, so calls chain left to
/// right. Nothing reaches the destination until [`send`](LogEvent::send);
/// an event dropped without being sent writes nothing.
///
/// # Example
///
/// ```
/// use rust_event_logger::prelude::*;
///
/// let (output, buffer) = Output::memory();
/// let logger = Logger::json(output);
///
/// logger.info("Request processed")
///     .int("status", 200)
///     .float64("latency_ms", 42.5)
///     .send()
///     .unwrap();
///
/// assert_eq!(
///     buffer.take_string(),
///     r#"{"msg":"Request processed","level":"info","status":200,"latency_ms":42.5}"#
/// );
/// ```
#[must_use = "an event does nothing until it is sent"]
pub struct LogEvent<'a> {
    kind: EventKind<'a>,
    failure: Option<LoggerError>,
}

impl<'a> LogEvent<'a> {
    /// An event that ignores every call
    #[inline]
    pub fn nop() -> Self {
        Self {
            kind: EventKind::Nop,
            failure: None,
        }
    }

    pub(crate) fn from_kind(kind: EventKind<'a>) -> Self {
        Self {
            kind,
            failure: None,
        }
    }

    /// Whether appended fields will be written anywhere
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.failure.is_none() && !matches!(self.kind, EventKind::Nop)
    }

    /// The action `send` will report for this event
    pub fn termination(&self) -> TerminationAction {
        self.kind.termination()
    }

    #[inline]
    fn field(mut self, key: &str, value: Field<'_>) -> Self {
        if self.failure.is_none() {
            self.kind.append(key, value);
        }
        self
    }

    pub fn int(self, key: &str, val: isize) -> Self {
        self.field(key, Field::Int(val as i64))
    }

    pub fn int8(self, key: &str, val: i8) -> Self {
        self.field(key, Field::Int(val.into()))
    }

    pub fn int16(self, key: &str, val: i16) -> Self {
        self.field(key, Field::Int(val.into()))
    }

    pub fn int32(self, key: &str, val: i32) -> Self {
        self.field(key, Field::Int(val.into()))
    }

    pub fn int64(self, key: &str, val: i64) -> Self {
        self.field(key, Field::Int(val))
    }

    pub fn uint(self, key: &str, val: usize) -> Self {
        self.field(key, Field::Uint(val as u64))
    }

    pub fn uint8(self, key: &str, val: u8) -> Self {
        self.field(key, Field::Uint(val.into()))
    }

    pub fn uint16(self, key: &str, val: u16) -> Self {
        self.field(key, Field::Uint(val.into()))
    }

    pub fn uint32(self, key: &str, val: u32) -> Self {
        self.field(key, Field::Uint(val.into()))
    }

    pub fn uint64(self, key: &str, val: u64) -> Self {
        self.field(key, Field::Uint(val))
    }

    pub fn float32(self, key: &str, val: f32) -> Self {
        self.field(key, Field::F32(val))
    }

    pub fn float64(self, key: &str, val: f64) -> Self {
        self.field(key, Field::F64(val))
    }

    pub fn bool(self, key: &str, val: bool) -> Self {
        self.field(key, Field::Bool(val))
    }

    pub fn str(self, key: &str, val: &str) -> Self {
        self.field(key, Field::Str(val))
    }

    /// Raw bytes: base64 in JSON records, hex in human-readable lines
    pub fn bytes(self, key: &str, val: &[u8]) -> Self {
        self.field(key, Field::Bytes(val))
    }

    /// Append the `Display` form of `val` as a string field
    pub fn stringer(self, key: &str, val: &dyn fmt::Display) -> Self {
        if !self.is_enabled() {
            return self;
        }
        let text = val.to_string();
        self.field(key, Field::Str(&text))
    }

    /// Append the current local time, RFC 3339 with nanoseconds, under `timestamp`
    pub fn timestamp(self) -> Self {
        if !self.is_enabled() {
            return self;
        }
        let now = TimestampFormat::Rfc3339Nano.format_now();
        self.field(TIMESTAMP_KEY, Field::Str(&now))
    }

    /// Serialize `val` with serde and append it verbatim.
    ///
    /// If serialization fails the event is aborted: later appends are
    /// ignored and `send` writes nothing and returns the error.
    pub fn any<T: Serialize + ?Sized>(mut self, key: &str, val: &T) -> Self {
        if !self.is_enabled() {
            return self;
        }
        match serde_json::to_vec(val) {
            Ok(raw) => self.field(key, Field::Json(&raw)),
            Err(e) => {
                self.failure = Some(LoggerError::JsonError(e));
                self
            }
        }
    }

    /// Append an error's description
    pub fn err(mut self, err: &dyn std::error::Error) -> Self {
        if self.failure.is_none() {
            self.kind.append_err(err);
        }
        self
    }

    /// Flush the event to its destination and report the termination decision.
    ///
    /// The caller decides how to act on the returned action; see
    /// [`emit`](LogEvent::emit) for the variant that acts on it directly.
    /// On failure the action is still available from the [`SendError`].
    pub fn send(self) -> SendResult {
        match self.failure {
            Some(err) => Err(SendError::new(self.kind.termination(), err)),
            None => self.kind.finish(),
        }
    }

    /// Send the event and carry out its termination action.
    ///
    /// Write failures are reported on stderr; a fatal or panic event still
    /// terminates when its write failed.
    pub fn emit(self) {
        let action = match self.send() {
            Ok(action) => action,
            Err(e) => {
                eprintln!("[LOGGER ERROR] Failed to send event: {}", e);
                e.into_parts().0
            }
        };
        action.apply();
    }
}

impl FieldEncoder for LogEvent<'_> {
    fn append(&mut self, key: &str, value: Field<'_>) {
        if self.failure.is_none() {
            self.kind.append(key, value);
        }
    }

    fn append_err(&mut self, err: &dyn std::error::Error) {
        if self.failure.is_none() {
            self.kind.append_err(err);
        }
    }

    fn finish(self) -> SendResult {
        self.send()
    }
}

impl fmt::Debug for LogEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            EventKind::Nop => "nop",
            EventKind::Json(_) => "json",
            EventKind::Pretty(_) => "pretty",
            EventKind::Multi(_) => "multi",
        };
        f.debug_struct("LogEvent")
            .field("kind", &kind)
            .field("failed", &self.failure.is_some())
            .finish()
    }
}
