//! Reply interpretation for the PolicyBot chat client
//!
//! Assistant replies are free text. Some end in a citation such as
//! `(PTO Policy — Carryover)`, and some embed an object the agent printed,
//! often in Python's spelling. This module turns a raw reply into something a
//! renderer can display without doing any parsing itself.
//!
//! Interpretation happens in two independent places:
//! - on receipt, [`citation`] splits the annotation off the answer
//!   (see [`conversation::Conversation::receive`]);
//! - on every render, [`jsonish`] looks for an object in the stored body and
//!   [`prefix`] recovers the prose in front of it (see [`message::render`]).
//!
//! Everything here is a pure function of its input string.

pub mod api;
pub mod citation;
pub mod conversation;
pub mod formats;
pub mod jsonish;
pub mod message;
pub mod prefix;
pub mod prompts;
pub mod trace;

pub use api::{AgentRequest, AgentResponse};
pub use citation::{extract_citation, CitationSplit};
pub use conversation::{Conversation, NO_ANSWER};
pub use jsonish::{extract_balanced_object, parse_jsonish, parse_jsonish_detailed, JsonishError};
pub use message::{render, Message, RenderedBody, RenderedMessage, Role};
pub use prefix::derive_prefix;
pub use prompts::EXAMPLE_PROMPTS;
pub use trace::{render_trace, TraceStep};
