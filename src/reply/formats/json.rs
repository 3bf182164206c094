//! JSON format: the rendered message serialized as-is

use super::registry::{FormatError, Formatter};
use crate::reply::message::RenderedMessage;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn format(&self, message: &RenderedMessage) -> Result<String, FormatError> {
        serde_json::to_string_pretty(message)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Rendered message as JSON"
    }
}
