//! Chat messages and the prose-vs-structured rendering decision

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;

use super::jsonish::parse_jsonish;
use super::prefix::derive_prefix;

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// One entry of the conversation, as received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            text: text.into(),
            citation: None,
        }
    }

    pub fn assistant(text: impl Into<String>, citation: Option<String>) -> Self {
        Message {
            role: Role::Assistant,
            text: text.into(),
            citation,
        }
    }
}

/// What the body of a message should be displayed as
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderedBody {
    /// Plain or Markdown text, shown as written
    Prose { text: String },
    /// An embedded object, shown pretty-printed under an optional prefix
    Structured {
        #[serde(skip_serializing_if = "Option::is_none")]
        prefix: Option<String>,
        value: Value,
    },
}

/// A message ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedMessage {
    pub role: Role,
    pub body: RenderedBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

impl RenderedMessage {
    /// The body as display text: prose verbatim, objects pretty-printed with
    /// two-space indentation.
    pub fn pretty_body(&self) -> String {
        match &self.body {
            RenderedBody::Prose { text } => text.clone(),
            RenderedBody::Structured { value, .. } => pretty_json(value),
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self.body, RenderedBody::Structured { .. })
    }
}

/// Decide how `message` is displayed.
///
/// User messages are never parsed. Assistant messages become structured when an
/// object can be read from their text and stay prose otherwise.
pub fn render(message: &Message) -> RenderedMessage {
    let body = match message.role {
        Role::User => RenderedBody::Prose {
            text: message.text.clone(),
        },
        Role::Assistant => match parse_jsonish(&message.text) {
            Some(value) => {
                debug!("assistant reply carries an object");
                RenderedBody::Structured {
                    prefix: derive_prefix(&message.text),
                    value,
                }
            }
            None => RenderedBody::Prose {
                text: message.text.clone(),
            },
        },
    };

    RenderedMessage {
        role: message.role,
        body,
        citation: message.citation.clone(),
    }
}

/// Pretty-print a value the way the chat client shows objects
pub fn pretty_json(value: &Value) -> String {
    // Serializing a Value cannot fail: keys are always strings.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
