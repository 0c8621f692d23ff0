//! Machine-readable encoder: one JSON object per event
//!
//! Records look like `{"msg":"...","level":"info","key":value,...}` with
//! fields in append order. No trailing newline is added.

use crate::core::event::{EventKind, LogEvent};
use crate::core::{
    BufferedSink, Field, FieldEncoder, LogLevel, Output, SendError, SendResult,
    TerminationAction, TerminationPolicy,
};
use base64::{prelude::BASE64_STANDARD, Engine};

/// Logger producing JSON records
#[derive(Debug, Clone)]
pub struct JsonLogger {
    output: Output,
    min_level: LogLevel,
    policy: TerminationPolicy,
}

impl JsonLogger {
    /// A logger writing to `output` with threshold `info`
    pub fn new(output: Output) -> Self {
        Self {
            output,
            min_level: LogLevel::Info,
            policy: TerminationPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: TerminationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    pub fn policy(&self) -> TerminationPolicy {
        self.policy
    }

    pub fn no_exit(&mut self) {
        self.policy.no_exit = true;
    }

    pub fn no_panic(&mut self) {
        self.policy.no_panic = true;
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        !self.output.is_discard() && level >= self.min_level
    }

    /// Start an event; filtered levels and discarded output yield a no-op event
    pub fn event(&self, level: LogLevel, msg: &str) -> LogEvent<'_> {
        if !self.is_enabled(level) {
            return LogEvent::nop();
        }
        LogEvent::from_kind(EventKind::Json(JsonEvent::start(self, level, msg)))
    }
}

/// A JSON record under construction
pub struct JsonEvent<'a> {
    sink: BufferedSink<'a>,
    action: TerminationAction,
}

impl<'a> JsonEvent<'a> {
    fn start(logger: &'a JsonLogger, level: LogLevel, msg: &str) -> Self {
        let mut sink = BufferedSink::new(&logger.output);
        sink.push_str(r#"{"msg":"#);
        sink.push_quoted(msg);
        sink.push_str(r#","level":""#);
        sink.push_str(level.to_str());
        sink.push(b'"');

        Self {
            sink,
            action: logger.policy.action_for(level, msg),
        }
    }

    pub(crate) fn termination(&self) -> &TerminationAction {
        &self.action
    }

    fn write_key(&mut self, key: &str) {
        self.sink.push(b',');
        self.sink.push_quoted(key);
        self.sink.push(b':');
    }

    /// JSON has no literal for NaN or infinities, so those are written as strings
    fn write_float(&mut self, val: f64, finite: bool, text: &dyn std::fmt::Display) {
        if finite {
            self.sink.push_display(text);
        } else {
            self.sink.push_quoted(&val.to_string());
        }
    }
}

impl FieldEncoder for JsonEvent<'_> {
    fn append(&mut self, key: &str, value: Field<'_>) {
        self.write_key(key);
        match value {
            Field::Int(i) => self.sink.push_display(&i),
            Field::Uint(u) => self.sink.push_display(&u),
            Field::F32(f) => self.write_float(f.into(), f.is_finite(), &f),
            Field::F64(f) => self.write_float(f, f.is_finite(), &f),
            Field::Bool(true) => self.sink.push_str("true"),
            Field::Bool(false) => self.sink.push_str("false"),
            Field::Str(s) => self.sink.push_quoted(s),
            Field::Bytes(b) => self.sink.push_quoted(&BASE64_STANDARD.encode(b)),
            Field::Json(raw) => self.sink.push_bytes(raw),
        }
    }

    fn append_err(&mut self, err: &dyn std::error::Error) {
        let text = err.to_string();
        self.append("error", Field::Str(&text));
    }

    fn finish(mut self) -> SendResult {
        self.sink.push(b'}');
        match self.sink.flush() {
            Ok(()) => Ok(self.action),
            Err(e) => Err(SendError::new(self.action, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Logger;
    use std::time::Duration;

    fn logger() -> (Logger, crate::core::MemoryBuffer) {
        let (out, mem) = Output::memory();
        (Logger::json(out), mem)
    }

    #[test]
    fn test_empty_message() {
        let (logger, mem) = logger();
        logger.info("").send().unwrap();
        assert_eq!(mem.take_string(), r#"{"msg":"","level":"info"}"#);
    }

    #[test]
    fn test_one_field() {
        let (logger, mem) = logger();
        logger.info("Test").int("n", 1234).send().unwrap();
        assert_eq!(mem.take_string(), r#"{"msg":"Test","level":"info","n":1234}"#);
    }

    #[test]
    fn test_two_fields() {
        let (logger, mem) = logger();
        logger
            .info("Test")
            .int("n", 1234)
            .float32("pi", 3.14)
            .send()
            .unwrap();
        assert_eq!(
            mem.take_string(),
            r#"{"msg":"Test","level":"info","n":1234,"pi":3.14}"#
        );
    }

    #[test]
    fn test_all_field_types() {
        let (logger, mem) = logger();
        let err = std::io::Error::new(std::io::ErrorKind::Other, "err");
        logger
            .info("All")
            .int("int", -1)
            .int8("int8", -1)
            .int16("int16", -1)
            .int32("int32", -1)
            .int64("int64", -1)
            .uint("uint", 1)
            .uint8("uint8", 1)
            .uint16("uint16", 1)
            .uint32("uint32", 1)
            .uint64("uint64", 1)
            .float32("float32", 3.14)
            .float64("float64", 6.28)
            .bool("bool", true)
            .str("string", "")
            .bytes("[]byte", &[0x12, 0x34, 0x56])
            .stringer("stringer", &Seconds(Duration::from_secs(1)))
            .any("any", &())
            .err(&err)
            .send()
            .unwrap();

        assert_eq!(
            mem.take_string(),
            r#"{"msg":"All","level":"info","int":-1,"int8":-1,"int16":-1,"int32":-1,"int64":-1,"uint":1,"uint8":1,"uint16":1,"uint32":1,"uint64":1,"float32":3.14,"float64":6.28,"bool":true,"string":"","[]byte":"EjRW","stringer":"1s","any":null,"error":"err"}"#
        );
    }

    struct Seconds(Duration);

    impl std::fmt::Display for Seconds {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}s", self.0.as_secs())
        }
    }

    #[test]
    fn test_filtered_level_writes_nothing() {
        let (logger, mem) = logger();
        logger.debug("x").int("n", 1).send().unwrap();
        assert!(mem.is_empty());
    }

    #[test]
    fn test_discard_output_is_nop() {
        let json = JsonLogger::new(Output::Discard).with_min_level(LogLevel::Debug);
        assert!(!json.event(LogLevel::Error, "x").is_enabled());
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let (logger, mem) = logger();
        logger
            .info("say \"hi\"\n")
            .str("path", "C:\\tmp")
            .send()
            .unwrap();

        let record = mem.take_string();
        let parsed: serde_json::Value = serde_json::from_str(&record).unwrap();
        assert_eq!(parsed["msg"], "say \"hi\"\n");
        assert_eq!(parsed["path"], "C:\\tmp");
    }

    #[test]
    fn test_non_finite_floats_stay_parseable() {
        let (logger, mem) = logger();
        logger
            .info("f")
            .float64("nan", f64::NAN)
            .float32("inf", f32::INFINITY)
            .send()
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&mem.take_string()).unwrap();
        assert_eq!(parsed["nan"], "NaN");
        assert_eq!(parsed["inf"], "inf");
    }

    #[test]
    fn test_duplicate_keys_are_kept_in_order() {
        let (logger, mem) = logger();
        logger.info("d").int("k", 1).int("k", 2).send().unwrap();
        assert_eq!(mem.take_string(), r#"{"msg":"d","level":"info","k":1,"k":2}"#);
    }

    #[test]
    fn test_err_field() {
        let (logger, mem) = logger();
        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        logger.error("failed").err(&err).send().unwrap();
        assert_eq!(
            mem.take_string(),
            r#"{"msg":"failed","level":"error","error":"boom"}"#
        );
    }

    #[test]
    fn test_level_threshold_can_be_lowered() {
        let (out, mem) = Output::memory();
        let mut json = JsonLogger::new(out);
        json.set_min_level(LogLevel::Debug);
        json.event(LogLevel::Debug, "dbg").send().unwrap();
        assert_eq!(mem.take_string(), r#"{"msg":"dbg","level":"debug"}"#);
    }
}
