//! Field values and the encoder capability shared by every event variant

use super::error::SendResult;
use std::fmt;

/// A borrowed field value, already narrowed to what an encoder can write.
///
/// Integers of every width are widened to `Int`/`Uint`; `F32` is kept
/// apart from `F64` so it prints with single-precision shortest form
/// (`3.14`, not `3.140000104904175`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'v> {
    Int(i64),
    Uint(u64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Str(&'v str),
    Bytes(&'v [u8]),
    /// Pre-serialized JSON text from `any`
    Json(&'v [u8]),
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Int(i) => write!(f, "{}", i),
            Field::Uint(u) => write!(f, "{}", u),
            Field::F32(fl) => write!(f, "{}", fl),
            Field::F64(fl) => write!(f, "{}", fl),
            Field::Bool(b) => write!(f, "{}", b),
            Field::Str(s) => f.write_str(s),
            Field::Bytes(b) => f.write_str(&hex::encode(b)),
            Field::Json(raw) => f.write_str(&String::from_utf8_lossy(raw)),
        }
    }
}

impl From<i64> for Field<'_> {
    fn from(i: i64) -> Self {
        Field::Int(i)
    }
}

impl From<u64> for Field<'_> {
    fn from(u: u64) -> Self {
        Field::Uint(u)
    }
}

impl From<f64> for Field<'_> {
    fn from(f: f64) -> Self {
        Field::F64(f)
    }
}

impl From<bool> for Field<'_> {
    fn from(b: bool) -> Self {
        Field::Bool(b)
    }
}

impl<'v> From<&'v str> for Field<'v> {
    fn from(s: &'v str) -> Self {
        Field::Str(s)
    }
}

/// Writes fields of one event into its output representation.
///
/// Implemented by each concrete event (JSON, human-readable, fan-out) and
/// by the closed dispatch enum behind [`LogEvent`](crate::LogEvent).
pub trait FieldEncoder {
    /// Append one `key`/value pair after every previously appended field
    fn append(&mut self, key: &str, value: Field<'_>);

    /// Append an error description; the key and layout are encoder specific
    fn append_err(&mut self, err: &dyn std::error::Error);

    /// Terminate the record, flush it and report the termination decision.
    ///
    /// A failed flush still carries the decision in its [`SendError`](crate::SendError).
    fn finish(self) -> SendResult;
}
