//! Agent trace steps
//!
//! When tracing is requested the backend returns its reasoning steps next to
//! the answer. They are shown verbatim, never interpreted.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::message::pretty_json;

/// One step of the agent loop
///
/// Nothing is validated: `step` is whatever label the backend sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    #[serde(default)]
    pub step: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<Value>,
}

impl TraceStep {
    /// The parts worth showing on this step, in display order.
    ///
    /// Empty parts (`null`, `false`, `0`, `""`) are skipped.
    pub fn parts(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        [
            ("plan", self.plan.as_ref()),
            ("tool_call", self.tool_call.as_ref()),
            ("observation", self.observation.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| match value {
            Some(value) if !is_empty_part(value) => Some((name, value)),
            _ => None,
        })
    }

    /// The step label as shown after `Step `
    pub fn label(&self) -> String {
        match &self.step {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

fn is_empty_part(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Read a trace field, treating anything that is not a list as absent.
///
/// Inside a list each entry stands alone: an entry that is not an object becomes
/// an empty step instead of hiding its neighbours.
pub(crate) fn lenient_steps<'de, D>(deserializer: D) -> Result<Option<Vec<TraceStep>>, D::Error>
where
    D: Deserializer<'de>,
{
    let steps: Vec<TraceStep> = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .map(|entry| serde_json::from_value(entry).unwrap_or_default())
            .collect(),
        _ => return Ok(None),
    };
    Ok(Some(steps))
}

/// Render steps as `Step N` headers followed by each part worth showing.
pub fn render_trace(steps: &[TraceStep]) -> String {
    let mut out = String::new();
    for step in steps {
        out.push_str(&format!("Step {}\n", step.label()));
        for (_, value) in step.parts() {
            out.push_str(&pretty_json(value));
            out.push('\n');
        }
    }
    out
}
