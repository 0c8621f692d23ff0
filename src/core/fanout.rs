//! Fan-out: one logical logger replicated across several loggers
//!
//! Members are sent in order. Their own termination is suppressed when
//! they join, so a fatal or panic event terminates once, after every
//! member has written it.

use super::error::{LoggerError, SendError, SendResult};
use super::event::{EventKind, LogEvent};
use super::field::{Field, FieldEncoder};
use super::log_level::LogLevel;
use super::logger::Logger;
use super::termination::{TerminationAction, TerminationPolicy};

/// Logger forwarding every event to each member
#[derive(Debug, Clone)]
pub struct MultiLogger {
    loggers: Vec<Logger>,
    policy: TerminationPolicy,
}

impl MultiLogger {
    /// Wrap `loggers`, suppressing their own exit and panic behavior
    pub fn new(loggers: Vec<Logger>) -> Self {
        let mut loggers = loggers;
        for logger in &mut loggers {
            logger.no_exit();
            logger.no_panic();
        }
        Self {
            loggers,
            policy: TerminationPolicy::default(),
        }
    }

    pub fn loggers(&self) -> &[Logger] {
        &self.loggers
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
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

    /// Change the threshold of every member
    pub fn set_min_level(&mut self, level: LogLevel) {
        for logger in &mut self.loggers {
            logger.set_min_level(level);
        }
    }

    /// The most verbose threshold among the members
    pub fn min_level(&self) -> Option<LogLevel> {
        self.loggers.iter().filter_map(Logger::min_level).min()
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.loggers.iter().any(|l| l.is_enabled(level))
    }

    /// Start the event on every member.
    ///
    /// When no member accepts the event and it would not terminate, the
    /// result is a plain no-op event.
    pub fn event(&self, level: LogLevel, msg: &str) -> LogEvent<'_> {
        let action = self.policy.action_for(level, msg);
        if action.is_none() && !self.is_enabled(level) {
            return LogEvent::nop();
        }
        let events = self
            .loggers
            .iter()
            .map(|logger| logger.log(level, msg))
            .collect();
        LogEvent::from_kind(EventKind::Multi(MultiEvent { events, action }))
    }
}

/// One event per member, driven together
pub struct MultiEvent<'a> {
    events: Vec<LogEvent<'a>>,
    action: TerminationAction,
}

impl MultiEvent<'_> {
    pub(crate) fn termination(&self) -> &TerminationAction {
        &self.action
    }
}

impl FieldEncoder for MultiEvent<'_> {
    fn append(&mut self, key: &str, value: Field<'_>) {
        for event in &mut self.events {
            event.append(key, value);
        }
    }

    fn append_err(&mut self, err: &dyn std::error::Error) {
        for event in &mut self.events {
            event.append_err(err);
        }
    }

    /// Send every member, even after a failure.
    ///
    /// The first failure is returned together with the combinator's own
    /// action; members never terminate on their own.
    fn finish(self) -> SendResult {
        let mut first_error: Option<LoggerError> = None;
        for event in self.events {
            if let Err(e) = event.send() {
                let (_, source) = e.into_parts();
                first_error.get_or_insert(source);
            }
        }
        match first_error {
            Some(e) => Err(SendError::new(self.action, e)),
            None => Ok(self.action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MemoryBuffer, Output};
    use crate::encoders::PrettyLogger;
    use crate::TimestampFormat;
    use std::io::{self, Write};

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn pair() -> (Logger, MemoryBuffer, MemoryBuffer) {
        let (json_out, json_mem) = Output::memory();
        let (pretty_out, pretty_mem) = Output::memory();
        let pretty = PrettyLogger::new(pretty_out)
            .with_time_format(TimestampFormat::Custom("T".into()));
        let multi = Logger::multi(vec![Logger::json(json_out), Logger::Pretty(pretty)]);
        (multi, json_mem, pretty_mem)
    }

    #[test]
    fn test_forwards_to_every_member() {
        let (multi, json_mem, pretty_mem) = pair();
        multi.info("x").int("n", 1).send().unwrap();

        assert_eq!(json_mem.take_string(), r#"{"msg":"x","level":"info","n":1}"#);
        assert_eq!(pretty_mem.take_string(), "T INF x n=1\n");
    }

    #[test]
    fn test_members_are_suppressed() {
        let (multi, _, _) = pair();
        let Logger::Multi(inner) = &multi else {
            panic!("expected fan-out logger");
        };
        for member in inner.loggers() {
            let policy = member.policy().unwrap();
            assert!(policy.no_exit && policy.no_panic);
        }
    }

    #[test]
    fn test_terminates_once_at_combinator_level() {
        let (multi, json_mem, pretty_mem) = pair();
        let action = multi.fatal("bye").send().unwrap();

        assert_eq!(action, TerminationAction::ExitProcess(1));
        assert!(!json_mem.is_empty());
        assert!(!pretty_mem.is_empty());

        let action = multi.panic("abort").send().unwrap();
        assert_eq!(action, TerminationAction::RaiseAbnormal("abort".to_string()));
    }

    #[test]
    fn test_combinator_suppression() {
        let (mut multi, _, _) = pair();
        multi.no_exit();
        multi.no_exit();
        multi.no_panic();
        assert!(multi.fatal("x").send().unwrap().is_none());
        assert!(multi.panic("x").send().unwrap().is_none());
    }

    #[test]
    fn test_best_effort_on_failure() {
        let (out, mem) = Output::memory();
        let multi = Logger::multi(vec![
            Logger::json(Output::from_writer(FailingWriter)),
            Logger::json(out),
        ]);

        let err = multi.info("x").send().unwrap_err();
        assert!(matches!(err.error(), LoggerError::IoOperation { .. }));
        assert!(err.action().is_none());
        assert_eq!(mem.take_string(), r#"{"msg":"x","level":"info"}"#);
    }

    #[test]
    fn test_failed_member_keeps_combinator_termination() {
        let (out, mem) = Output::memory();
        let multi = Logger::multi(vec![
            Logger::json(Output::from_writer(FailingWriter)),
            Logger::json(out),
        ]);

        let err = multi.fatal("bye").send().unwrap_err();
        assert_eq!(err.action(), &TerminationAction::ExitProcess(1));
        assert!(matches!(err.error(), LoggerError::IoOperation { .. }));
        assert_eq!(mem.take_string(), r#"{"msg":"bye","level":"fatal"}"#);

        let err = multi.panic("abort").send().unwrap_err();
        assert_eq!(
            err.action(),
            &TerminationAction::RaiseAbnormal("abort".to_string())
        );
    }

    #[test]
    fn test_all_members_filtered_is_nop() {
        let (multi, json_mem, pretty_mem) = pair();
        let event = multi.debug("x");
        assert!(!event.is_enabled());
        event.send().unwrap();
        assert!(json_mem.is_empty() && pretty_mem.is_empty());
    }

    #[test]
    fn test_set_min_level_forwards() {
        let (mut multi, json_mem, pretty_mem) = pair();
        multi.set_min_level(LogLevel::Debug);
        assert_eq!(multi.min_level(), Some(LogLevel::Debug));
        multi.debug("d").send().unwrap();
        assert_eq!(json_mem.take_string(), r#"{"msg":"d","level":"debug"}"#);
        assert_eq!(pretty_mem.take_string(), "T DBG d\n");
    }
}
