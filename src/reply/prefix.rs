//! Introductory prose before an embedded object
//!
//! When a reply reads `Here is what I found: {...}`, the renderer shows
//! `Here is what I found` above the pretty-printed object.

use super::jsonish::first_brace;

/// Derive the prose prefix that precedes the first `{` in `text`.
///
/// Only meaningful once an object has been parsed out of `text`. Trailing `:`,
/// `-` and `–` are stripped; a prefix that is empty afterwards is `None`.
pub fn derive_prefix(text: &str) -> Option<String> {
    let brace = first_brace(text)?;
    let before = text[..brace].trim();
    if before.is_empty() || before.starts_with('{') {
        return None;
    }

    let stripped = before.trim_end_matches([':', '-', '–']);
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colon_is_stripped() {
        assert_eq!(
            derive_prefix("Here is what I found: {'a': 1}"),
            Some("Here is what I found".to_string())
        );
    }

    #[test]
    fn test_dashes_are_stripped() {
        assert_eq!(derive_prefix("Result -- {a: 1}"), Some("Result ".to_string()));
        assert_eq!(derive_prefix("Summary –{a: 1}"), Some("Summary ".to_string()));
    }

    #[test]
    fn test_em_dash_is_kept() {
        assert_eq!(derive_prefix("Result — {a: 1}"), Some("Result —".to_string()));
    }

    #[test]
    fn test_object_at_start_has_no_prefix() {
        assert_eq!(derive_prefix("{'a': 1}"), None);
        assert_eq!(derive_prefix("   {'a': 1}"), None);
    }

    #[test]
    fn test_punctuation_only_prefix_is_none() {
        assert_eq!(derive_prefix(":- {'a': 1}"), None);
    }

    #[test]
    fn test_no_brace_has_no_prefix() {
        assert_eq!(derive_prefix("[1, 2, 3]"), None);
    }
}
