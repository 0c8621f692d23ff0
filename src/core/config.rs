//! Serializable logger configuration

use super::error::LoggerError;
use super::log_level::LogLevel;
use super::logger::Logger;
use super::sink::Output;
use super::termination::TerminationPolicy;
use super::timestamp::TimestampFormat;
use crate::encoders::{ColorMode, JsonLogger, Palette, PrettyLogger, PrettyStyle};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output representation of a configured logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One JSON record per event
    #[default]
    Json,
    /// Human-readable line with a time-of-day marker
    Pretty,
    /// Human-readable line with a severity glyph
    Cli,
}

impl FromStr for Format {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "pretty" => Ok(Format::Pretty),
            "cli" => Ok(Format::Cli),
            _ => Err(LoggerError::config(
                "Format",
                format!("unknown format '{}', expected json, pretty or cli", s),
            )),
        }
    }
}

/// Everything needed to build a [`Logger`] except its destination.
///
/// Missing keys take their defaults when deserialized; the palette is not
/// serialized.
///
/// # Example
///
/// ```
/// use rust_event_logger::prelude::*;
///
/// let config: LoggerConfig =
///     serde_json::from_str(r#"{"format":"pretty","min_level":"debug","color":"never"}"#).unwrap();
/// let logger = config.build(Output::stderr());
/// assert!(logger.is_enabled(LogLevel::Debug));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: Format,
    pub min_level: LogLevel,
    pub no_exit: bool,
    pub no_panic: bool,
    pub color: ColorMode,
    /// Marker format of the `pretty` format
    pub time_format: TimestampFormat,
    #[serde(skip)]
    pub palette: Palette,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: Format::Json,
            min_level: LogLevel::Info,
            no_exit: false,
            no_panic: false,
            color: ColorMode::Auto,
            time_format: TimestampFormat::Kitchen,
            palette: Palette::default(),
        }
    }
}

impl LoggerConfig {
    pub fn policy(&self) -> TerminationPolicy {
        TerminationPolicy {
            no_exit: self.no_exit,
            no_panic: self.no_panic,
        }
    }

    /// Build a logger writing to `output`
    pub fn build(&self, output: Output) -> Logger {
        match self.format {
            Format::Json => JsonLogger::new(output)
                .with_min_level(self.min_level)
                .with_policy(self.policy())
                .into(),
            Format::Pretty | Format::Cli => {
                let style = match self.format {
                    Format::Cli => PrettyStyle::Banner,
                    _ => PrettyStyle::Console,
                };
                let use_color = self.color.resolve(&output);
                PrettyLogger::new(output)
                    .with_style(style)
                    .with_color(use_color)
                    .with_min_level(self.min_level)
                    .with_policy(self.policy())
                    .with_time_format(self.time_format.clone())
                    .with_palette(self.palette.clone())
                    .into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.min_level, LogLevel::Info);
        assert!(!config.no_exit);
        assert_eq!(config.policy(), TerminationPolicy::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"format":"cli","no_exit":true}"#).unwrap();
        assert_eq!(config.format, Format::Cli);
        assert!(config.no_exit);
        assert!(!config.no_panic);
        assert_eq!(config.time_format, TimestampFormat::Kitchen);
    }

    #[test]
    fn test_roundtrip_without_palette() {
        let config = LoggerConfig {
            format: Format::Pretty,
            min_level: LogLevel::Warn,
            time_format: TimestampFormat::Rfc3339Nano,
            ..LoggerConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("palette"));
        let back: LoggerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<Format>().unwrap(), Format::Json);
        let err = "xml".parse::<Format>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_build_each_format() {
        let (out, mem) = Output::memory();
        let config = LoggerConfig {
            format: Format::Pretty,
            time_format: TimestampFormat::Custom("T".into()),
            ..LoggerConfig::default()
        };
        config.build(out).info("hello").send().unwrap();
        assert_eq!(mem.take_string(), "T INF hello\n");

        let logger = LoggerConfig::default().build(Output::Discard);
        assert!(matches!(logger, Logger::Json(_)));
        assert!(!logger.is_enabled(LogLevel::Error));
    }
}
