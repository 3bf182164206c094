//! Conversation state: what was sent, what came back
//!
//! This is the first of the two places replies are interpreted: a received
//! answer has its citation split off before it is stored. The stored body is
//! interpreted again, independently, each time it is rendered.

use tracing::{debug, warn};

use super::api::{AgentRequest, AgentResponse};
use super::citation::extract_citation;
use super::message::{render, Message, RenderedMessage};
use super::trace::TraceStep;

/// Stored in place of a missing or empty answer
pub const NO_ANSWER: &str = "(no answer)";

/// The messages of one chat session plus the most recent trace
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    last_trace: Option<Vec<TraceStep>>,
    trace_enabled: bool,
}

impl Conversation {
    /// Start a conversation with an assistant greeting
    pub fn new(greeting: &str, trace_enabled: bool) -> Self {
        Conversation {
            messages: vec![Message::assistant(greeting, None)],
            last_trace: None,
            trace_enabled,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_trace(&self) -> Option<&[TraceStep]> {
        self.last_trace.as_deref()
    }

    pub fn set_trace_enabled(&mut self, enabled: bool) {
        self.trace_enabled = enabled;
    }

    /// Record a user turn and build the request for it.
    ///
    /// Blank input sends nothing.
    pub fn submit(&mut self, input: &str) -> Option<AgentRequest> {
        let content = input.trim();
        if content.is_empty() {
            return None;
        }
        self.messages.push(Message::user(content));
        Some(AgentRequest {
            message: content.to_string(),
            trace: self.trace_enabled,
        })
    }

    /// Store the assistant's answer, citation split off, and its trace.
    pub fn receive(&mut self, response: AgentResponse) -> &Message {
        let raw = match response.answer {
            Some(answer) if !answer.is_empty() => answer,
            _ => {
                debug!("agent returned no answer");
                NO_ANSWER.to_string()
            }
        };
        let split = extract_citation(&raw);
        self.messages
            .push(Message::assistant(split.text, split.citation));
        self.last_trace = response.trace;
        self.latest()
    }

    /// Store a transport failure as an assistant message.
    pub fn receive_error(&mut self, detail: &str) -> &Message {
        warn!(detail, "agent request failed");
        self.messages
            .push(Message::assistant(format!("Server error: {}", detail), None));
        self.latest()
    }

    /// Render every message for display
    pub fn rendered(&self) -> Vec<RenderedMessage> {
        self.messages.iter().map(render).collect()
    }

    fn latest(&self) -> &Message {
        // Only called right after a push
        &self.messages[self.messages.len() - 1]
    }
}
