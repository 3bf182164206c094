//! Output formats for rendered messages
//!
//! - text: what a terminal user reads
//! - json: the rendered message for other programs

pub mod json;
pub mod registry;
pub mod text;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use text::TextFormatter;
