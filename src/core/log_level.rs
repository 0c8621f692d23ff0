//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Event severity, ordered from least to most severe.
///
/// The ordering is used both for threshold filtering and for the
/// termination policy: `Fatal` exits the process and `Panic` raises an
/// abnormal termination when an event is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Panic = 5,
}

impl LogLevel {
    /// Every level, least severe first
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Panic,
    ];

    /// Canonical lowercase name, as written in machine-readable records
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
            LogLevel::Panic => "panic",
        }
    }

    /// Three-letter tag used by the console style of the human-readable encoder
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DBG",
            LogLevel::Info => "INF",
            LogLevel::Warn => "WRN",
            LogLevel::Error => "ERR",
            LogLevel::Fatal => "FTL",
            LogLevel::Panic => "PNC",
        }
    }

    /// Leading glyph used by the banner style of the human-readable encoder
    pub fn glyph(&self) -> &'static str {
        match self {
            LogLevel::Debug => "[DBG]",
            LogLevel::Info => "-->",
            LogLevel::Warn | LogLevel::Error | LogLevel::Fatal | LogLevel::Panic => " ->",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Yellow,
            LogLevel::Info => Green,
            LogLevel::Warn => Red,
            LogLevel::Error => BrightRed,
            LogLevel::Fatal | LogLevel::Panic => TrueColor { r: 139, g: 0, b: 0 },
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            "panic" => Ok(LogLevel::Panic),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
