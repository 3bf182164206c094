//! Terminal text format
//!
//! Prose is printed as written. Objects go in a fenced `json` block under their
//! prefix. The citation, if any, closes the message.

use super::registry::{FormatError, Formatter};
use crate::reply::message::{RenderedBody, RenderedMessage};

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn format(&self, message: &RenderedMessage) -> Result<String, FormatError> {
        let mut out = format!("[{}]\n", message.role);

        if let RenderedBody::Structured {
            prefix: Some(prefix),
            ..
        } = &message.body
        {
            out.push_str(prefix);
            out.push('\n');
        }

        if message.is_structured() {
            out.push_str("```json\n");
            out.push_str(&message.pretty_body());
            out.push_str("\n```\n");
        } else {
            out.push_str(&message.pretty_body());
            out.push('\n');
        }

        if let Some(citation) = &message.citation {
            out.push_str(citation);
            out.push('\n');
        }

        Ok(out)
    }

    fn description(&self) -> &str {
        "Human-readable terminal rendering"
    }
}
