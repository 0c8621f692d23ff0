//! Error types for the logger system

use super::termination::TerminationAction;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Outcome of sending an event
pub type SendResult = std::result::Result<TerminationAction, SendError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A value passed to `any` could not be serialized
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The process-wide logger was installed twice
    #[error("Global logger already initialized")]
    AlreadyInitialized,

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

/// A send that failed to write, still carrying the event's termination action.
///
/// The action is decided when the event is created and survives a failed
/// write, so a fatal event on a broken destination still exits.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct SendError {
    action: TerminationAction,
    #[source]
    source: LoggerError,
}

impl SendError {
    pub fn new(action: TerminationAction, source: LoggerError) -> Self {
        Self { action, source }
    }

    pub fn action(&self) -> &TerminationAction {
        &self.action
    }

    pub fn error(&self) -> &LoggerError {
        &self.source
    }

    pub fn into_parts(self) -> (TerminationAction, LoggerError) {
        (self.action, self.source)
    }
}
