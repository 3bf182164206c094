//! Values exchanged with the agent backend
//!
//! Transport is someone else's job; these are the shapes of the `/agent`
//! request body and its response.

use serde::{Deserialize, Serialize};

use super::trace::{lenient_steps, TraceStep};

/// Body posted to the agent for one user turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub message: String,
    pub trace: bool,
}

/// The agent's reply to one turn
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AgentResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_steps")]
    pub trace: Option<Vec<TraceStep>>,
}
