//! Embedded object extraction
//!
//! Reads structured data that an assistant embedded in an otherwise prose reply,
//! e.g. `Here you go: {'name': 'Pranshav', 'active': True,}`.
//!
//! The pipeline consists of:
//! 1. Strict JSON parse of the whole text (the reply *is* the object)
//! 2. Balanced brace scan for the first top-level `{...}` span ./jsonish/balanced.rs
//! 3. Foreign literal normalization (`None`/`True`/`False`) ./jsonish/normalize.rs
//! 4. Lenient grammar: logos tokens ./jsonish/tokens.rs fed to a chumsky parser
//!    ./jsonish/parser.rs
//!
//! Every stage can fail. [`parse_jsonish`] folds all failures into `None`, which
//! callers read as "render as prose"; [`parse_jsonish_detailed`] reports which
//! stage gave up.

pub mod balanced;
pub mod error;
pub mod lexer;
pub mod normalize;
pub mod parser;
pub mod tokens;

pub use balanced::{extract_balanced_object, first_brace, scan_braces, BraceScan};
pub use error::JsonishError;
pub use normalize::normalize_foreign_literals;
pub use parser::{parse_lenient, MAX_DEPTH};

use serde_json::Value;
use tracing::{debug, trace};

/// Parse JSON-ish content inside free-form text.
///
/// Returns `None` when there is no object, when the braces are unbalanced, when
/// the candidate nests too deeply, and when it is malformed.
pub fn parse_jsonish(text: &str) -> Option<Value> {
    parse_jsonish_detailed(text).ok()
}

/// Same pipeline as [`parse_jsonish`], keeping the failure reason.
///
/// A strict parse that yields JSON `null` counts as [`JsonishError::NotFound`].
pub fn parse_jsonish_detailed(text: &str) -> Result<Value, JsonishError> {
    if text.is_empty() {
        return Err(JsonishError::NotFound);
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Null) => return Err(JsonishError::NotFound),
        Ok(value) => {
            trace!("reply is strict JSON");
            return Ok(value);
        }
        Err(e) => trace!(error = %e, "strict parse failed, scanning for an object"),
    }

    let range = match scan_braces(text) {
        BraceScan::Balanced(range) => range,
        BraceScan::NoObject => return Err(JsonishError::NotFound),
        BraceScan::Unterminated { start } => {
            debug!(start, "object never closed");
            return Err(JsonishError::Unbalanced { offset: start });
        }
        BraceScan::StrayClose { at } => {
            debug!(at, "closing brace before any object");
            return Err(JsonishError::Unbalanced { offset: at });
        }
    };

    let start = range.start;
    let candidate = normalize_foreign_literals(&text[range]);
    // Each rewrite keeps its keyword's length, so candidate offsets map back
    // onto `text` by adding the span start.
    parse_lenient(&candidate).map_err(|e| {
        debug!(error = %e, "embedded object rejected by lenient grammar");
        e.offset_by(start)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strict_path() {
        assert_eq!(
            parse_jsonish(r#"{"a": 1, "b": true}"#),
            Some(json!({"a": 1, "b": true}))
        );
    }

    #[test]
    fn test_strict_scalars_and_arrays() {
        assert_eq!(parse_jsonish("[1, 2]"), Some(json!([1, 2])));
        assert_eq!(parse_jsonish("42"), Some(json!(42)));
        assert_eq!(parse_jsonish("null"), None);
        assert_eq!(parse_jsonish("0"), Some(json!(0)));
        assert_eq!(parse_jsonish("\"\""), Some(json!("")));
    }

    #[test]
    fn test_lenient_path() {
        assert_eq!(
            parse_jsonish("Here you go: {'name': 'Pranshav', 'days': 5, 'active': True,}"),
            Some(json!({"name": "Pranshav", "days": 5, "active": true}))
        );
    }

    #[test]
    fn test_python_none() {
        assert_eq!(
            parse_jsonish("Result: {'approver': None, 'approved': False}"),
            Some(json!({"approver": null, "approved": false}))
        );
    }

    #[test]
    fn test_prose_only() {
        assert_eq!(parse_jsonish("no object here at all"), None);
        assert_eq!(
            parse_jsonish_detailed("no object here at all"),
            Err(JsonishError::NotFound)
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(parse_jsonish(""), None);
    }

    #[test]
    fn test_unbalanced() {
        assert_eq!(parse_jsonish("broken: {a: 1,"), None);
        assert_eq!(
            parse_jsonish_detailed("broken: {a: 1,"),
            Err(JsonishError::Unbalanced { offset: 8 })
        );
    }

    #[test]
    fn test_malformed_candidate() {
        assert_eq!(parse_jsonish("see {a: b c}"), None);
        assert!(matches!(
            parse_jsonish_detailed("see {a: b c}"),
            Err(JsonishError::Syntax { .. })
        ));
    }

    #[test]
    fn test_lex_error_offset_is_relative_to_text() {
        assert_eq!(
            parse_jsonish_detailed("ok {a: #}"),
            Err(JsonishError::Lex { offset: 7 })
        );
    }

    #[test]
    fn test_deeply_nested_reply_is_prose() {
        let text = format!("x {}1{}", "{a:".repeat(50_000), "}".repeat(50_000));
        assert_eq!(parse_jsonish(&text), None);
        // 129th `{` sits after "x " and 128 copies of "{a:"
        assert_eq!(
            parse_jsonish_detailed(&text),
            Err(JsonishError::TooDeep {
                offset: 2 + 3 * MAX_DEPTH,
                limit: MAX_DEPTH
            })
        );
    }

    #[test]
    fn test_only_first_object_is_considered() {
        assert_eq!(
            parse_jsonish("first {'a': 1} then {'b': 2}"),
            Some(json!({"a": 1}))
        );
    }
}
