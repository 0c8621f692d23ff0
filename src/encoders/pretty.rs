//! Human-readable encoder: one colorized line per event
//!
//! Two presentation styles share the same field layout:
//! - `Console`: `3:04PM INF message key=value`
//! - `Banner`: `--> message key=value` for CLI-style output
//!
//! Colors are plain ANSI escapes built from the palette; with color off
//! every line is byte-identical apart from the escapes.

use crate::core::event::{EventKind, LogEvent};
use crate::core::{
    BufferedSink, Field, FieldEncoder, LogLevel, Output, SendError, SendResult,
    TerminationAction, TerminationPolicy, TimestampFormat,
};
use colored::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const RESET: &str = "\x1b[0m";

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when the destination is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn resolve(self, output: &Output) -> bool {
        match self {
            ColorMode::Auto => output.is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(format!("Invalid color mode: '{}'", s)),
        }
    }
}

/// Colors used by the human-readable encoder
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub time: Color,
    /// `None` leaves the message in the terminal's default color
    pub message: Option<Color>,
    pub key: Color,
    pub debug: Color,
    pub info: Color,
    pub warn: Color,
    pub error: Color,
    pub fatal: Color,
    pub panic: Color,
}

impl Palette {
    pub fn level(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Debug => self.debug,
            LogLevel::Info => self.info,
            LogLevel::Warn => self.warn,
            LogLevel::Error => self.error,
            LogLevel::Fatal => self.fatal,
            LogLevel::Panic => self.panic,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            time: Color::BrightBlack,
            message: None,
            key: Color::Cyan,
            debug: LogLevel::Debug.color_code(),
            info: LogLevel::Info.color_code(),
            warn: LogLevel::Warn.color_code(),
            error: LogLevel::Error.color_code(),
            fatal: LogLevel::Fatal.color_code(),
            panic: LogLevel::Panic.color_code(),
        }
    }
}

/// Leading marker of each line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrettyStyle {
    /// Time of day followed by a three-letter severity tag
    #[default]
    Console,
    /// Severity glyph only (`[DBG]`, `-->`, ` ->`)
    Banner,
}

/// Logger producing human-readable lines
#[derive(Debug, Clone)]
pub struct PrettyLogger {
    output: Output,
    min_level: LogLevel,
    policy: TerminationPolicy,
    style: PrettyStyle,
    use_color: bool,
    time_format: TimestampFormat,
    palette: Palette,
}

impl PrettyLogger {
    /// Console style; colors are on when `output` is a terminal
    pub fn new(output: Output) -> Self {
        let use_color = ColorMode::Auto.resolve(&output);
        Self {
            output,
            min_level: LogLevel::Info,
            policy: TerminationPolicy::default(),
            style: PrettyStyle::Console,
            use_color,
            time_format: TimestampFormat::Kitchen,
            palette: Palette::default(),
        }
    }

    /// Banner style for command-line tools
    pub fn cli(output: Output) -> Self {
        Self::new(output).with_style(PrettyStyle::Banner)
    }

    #[must_use]
    pub fn with_style(mut self, style: PrettyStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
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

    #[must_use]
    pub fn with_time_format(mut self, format: TimestampFormat) -> Self {
        self.time_format = format;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn style(&self) -> PrettyStyle {
        self.style
    }

    pub fn uses_color(&self) -> bool {
        self.use_color
    }

    pub fn set_color(&mut self, use_color: bool) {
        self.use_color = use_color;
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
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
        LogEvent::from_kind(EventKind::Pretty(PrettyEvent::start(self, level, msg)))
    }
}

/// A human-readable line under construction
pub struct PrettyEvent<'a> {
    logger: &'a PrettyLogger,
    sink: BufferedSink<'a>,
    action: TerminationAction,
}

impl<'a> PrettyEvent<'a> {
    fn start(logger: &'a PrettyLogger, level: LogLevel, msg: &str) -> Self {
        let mut event = Self {
            logger,
            sink: BufferedSink::new(&logger.output),
            action: logger.policy.action_for(level, msg),
        };
        let palette = &logger.palette;
        let level_color = palette.level(level);

        match logger.style {
            PrettyStyle::Console => {
                let now = logger.time_format.format_now();
                event.paint(Some(palette.time), |sink| sink.push_str(&now));
                event.sink.push(b' ');
                event.paint(Some(level_color), |sink| sink.push_str(level.tag()));
            }
            PrettyStyle::Banner => {
                event.paint(Some(level_color), |sink| sink.push_str(level.glyph()));
            }
        }
        event.sink.push(b' ');
        event.paint(palette.message, |sink| sink.push_single_line(msg));
        event
    }

    pub(crate) fn termination(&self) -> &TerminationAction {
        &self.action
    }

    /// Run `write` wrapped in `color` when colors are enabled
    fn paint(&mut self, color: Option<Color>, write: impl FnOnce(&mut BufferedSink<'a>)) {
        match color.filter(|_| self.logger.use_color) {
            Some(color) => {
                self.sink.push_str("\x1b[");
                self.sink.push_str(&color.to_fg_str());
                self.sink.push(b'm');
                write(&mut self.sink);
                self.sink.push_str(RESET);
            }
            None => write(&mut self.sink),
        }
    }

    fn write_key(&mut self, key: &str) {
        self.sink.push(b' ');
        self.paint(Some(self.logger.palette.key), |sink| sink.push_single_line(key));
        self.sink.push(b'=');
    }
}

impl FieldEncoder for PrettyEvent<'_> {
    fn append(&mut self, key: &str, value: Field<'_>) {
        self.write_key(key);
        match value {
            Field::Int(i) => self.sink.push_display(&i),
            Field::Uint(u) => self.sink.push_display(&u),
            Field::F32(f) => self.sink.push_display(&f),
            Field::F64(f) => self.sink.push_display(&f),
            Field::Bool(true) => self.sink.push_str("true"),
            Field::Bool(false) => self.sink.push_str("false"),
            Field::Str(s) => self.sink.push_quoted(s),
            Field::Bytes(b) => self.sink.push_quoted(&hex::encode(b)),
            Field::Json(raw) => self.sink.push_bytes(raw),
        }
    }

    /// Always ` error="..."` in the error color, regardless of the key color
    fn append_err(&mut self, err: &dyn std::error::Error) {
        let text = err.to_string();
        let color = Some(self.logger.palette.error);
        self.sink.push(b' ');
        self.paint(color, |sink| sink.push_str("error="));
        self.paint(color, |sink| sink.push_quoted(&text));
    }

    fn finish(mut self) -> SendResult {
        self.sink.push(b'\n');
        match self.sink.flush() {
            Ok(()) => Ok(self.action),
            Err(e) => Err(SendError::new(self.action, e)),
        }
    }
}
