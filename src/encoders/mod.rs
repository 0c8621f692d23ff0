//! Output encoders: JSON records and human-readable lines

pub mod json;
pub mod pretty;

pub use json::{JsonEvent, JsonLogger};
pub use pretty::{ColorMode, Palette, PrettyEvent, PrettyLogger, PrettyStyle};
