//! Event destinations and the per-event buffered sink
//!
//! Every event accumulates its bytes in memory and performs exactly one
//! write to its destination when it is sent. Events that target
//! [`Output::Discard`] never allocate a sink at all.

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::sync::Arc;

/// A writer shared by every event of one logger
pub type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Where the bytes of a sent event go
#[derive(Clone, Default)]
pub enum Output {
    /// Drops everything; loggers writing here hand out no-op events
    #[default]
    Discard,
    Stdout,
    Stderr,
    Writer(SharedWriter),
}

impl Output {
    pub fn stdout() -> Self {
        Output::Stdout
    }

    pub fn stderr() -> Self {
        Output::Stderr
    }

    /// Wrap an arbitrary writer
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Output::Writer(Arc::new(Mutex::new(Box::new(writer))))
    }

    /// Open `path` for appending, creating it if needed
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;
        Ok(Self::from_writer(file))
    }

    /// An in-memory destination plus a handle for reading back what was written
    pub fn memory() -> (Self, MemoryBuffer) {
        let buffer = MemoryBuffer::new();
        (Self::from_writer(buffer.clone()), buffer)
    }

    pub fn is_discard(&self) -> bool {
        matches!(self, Output::Discard)
    }

    /// Whether the destination is an interactive terminal.
    ///
    /// Arbitrary writers are never considered terminals.
    pub fn is_terminal(&self) -> bool {
        match self {
            Output::Stdout => io::stdout().is_terminal(),
            Output::Stderr => io::stderr().is_terminal(),
            Output::Discard | Output::Writer(_) => false,
        }
    }

    /// Write `bytes` in a single call and flush the destination
    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Output::Discard => Ok(()),
            Output::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            Output::Stderr => {
                let mut out = io::stderr().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            Output::Writer(writer) => {
                let mut out = writer.lock();
                out.write_all(bytes)?;
                out.flush()
            }
        }
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Discard => f.write_str("Discard"),
            Output::Stdout => f.write_str("Stdout"),
            Output::Stderr => f.write_str("Stderr"),
            Output::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

/// Growable in-memory destination, cheap to clone
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far
    pub fn contents(&self) -> Vec<u8> {
        self.bytes.lock().clone()
    }

    /// Drain the buffer, returning its contents as (lossy) UTF-8
    pub fn take_string(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Write for MemoryBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Accumulates one event in memory, then flushes it to its [`Output`] once
pub struct BufferedSink<'a> {
    buf: Vec<u8>,
    out: &'a Output,
    deferred: Option<LoggerError>,
}

impl<'a> BufferedSink<'a> {
    pub fn new(out: &'a Output) -> Self {
        Self {
            buf: Vec::with_capacity(256),
            out,
            deferred: None,
        }
    }

    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    #[inline]
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append the `Display` form of `value`
    pub fn push_display(&mut self, value: &dyn fmt::Display) {
        if let Err(e) = write!(&mut self.buf, "{}", value) {
            self.defer(LoggerError::io_operation(
                "formatting field",
                "Display implementation returned an error",
                e,
            ));
        }
    }

    /// Append `s` as a double-quoted JSON string
    pub fn push_quoted(&mut self, s: &str) {
        if let Err(e) = serde_json::to_writer(&mut self.buf, s) {
            self.defer(LoggerError::JsonError(e));
        }
    }

    /// Keep the first failure; it is reported by `flush` instead of writing
    fn defer(&mut self, err: LoggerError) {
        if self.deferred.is_none() {
            self.deferred = Some(err);
        }
    }

    /// Append `s` with line breaks and tabs escaped, unquoted
    pub fn push_single_line(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '\n' => self.buf.extend_from_slice(b"\\n"),
                '\r' => self.buf.extend_from_slice(b"\\r"),
                '\t' => self.buf.extend_from_slice(b"\\t"),
                _ => {
                    let mut utf8 = [0u8; 4];
                    self.buf.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes accumulated so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Write the whole buffer to the destination. The sink is consumed.
    ///
    /// If a value could not be encoded nothing is written and that failure
    /// is returned.
    pub fn flush(self) -> Result<()> {
        if let Some(err) = self.deferred {
            return Err(err);
        }
        self.out.write_all(&self.buf).map_err(|e| {
            LoggerError::io_operation(
                "flushing event",
                format!("failed to write {} bytes to {:?}", self.buf.len(), self.out),
                e,
            )
        })
    }
}
