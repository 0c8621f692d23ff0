//! What happens after a fatal or panic event has been sent

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Exit status used for fatal events
pub const FATAL_EXIT_CODE: i32 = 1;

/// The decision returned by `send`.
///
/// Events never exit or unwind on their own; the caller (or
/// [`TerminationAction::apply`]) acts on this value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[must_use]
pub enum TerminationAction {
    #[default]
    None,
    /// Terminate the process with this status
    ExitProcess(i32),
    /// Unwind with this message
    RaiseAbnormal(String),
}

impl TerminationAction {
    pub fn is_none(&self) -> bool {
        matches!(self, TerminationAction::None)
    }

    /// Carry out the action: exit the process, panic, or return.
    pub fn apply(self) {
        match self {
            TerminationAction::None => {}
            TerminationAction::ExitProcess(code) => std::process::exit(code),
            TerminationAction::RaiseAbnormal(message) => panic!("{}", message),
        }
    }
}

/// Per-logger suppression flags for the two terminating severities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TerminationPolicy {
    /// Fatal events do not exit the process
    pub no_exit: bool,
    /// Panic events do not raise an abnormal termination
    pub no_panic: bool,
}

impl TerminationPolicy {
    /// A policy that never terminates
    pub const SUPPRESSED: TerminationPolicy = TerminationPolicy {
        no_exit: true,
        no_panic: true,
    };

    /// Resolve the action for an event of `level` carrying `message`
    pub fn action_for(&self, level: LogLevel, message: &str) -> TerminationAction {
        match level {
            LogLevel::Fatal if !self.no_exit => TerminationAction::ExitProcess(FATAL_EXIT_CODE),
            LogLevel::Panic if !self.no_panic => {
                TerminationAction::RaiseAbnormal(message.to_string())
            }
            _ => TerminationAction::None,
        }
    }
}
