//! Balanced brace scanning
//!
//! Finds the first top-level `{...}` span in free text. Braces are counted
//! wherever they appear, quoted or not, and the scan never looks past the first
//! span: a malformed first object means no object at all.

use std::ops::Range;

/// Outcome of scanning text for its first top-level object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BraceScan {
    /// Byte range of the first balanced span, closing brace included
    Balanced(Range<usize>),
    /// The text contains no `{`
    NoObject,
    /// The `{` at `start` is never closed
    Unterminated { start: usize },
    /// A `}` at `at` arrived while no object was open
    StrayClose { at: usize },
}

/// Scan `text` left to right, tracking brace depth.
pub fn scan_braces(text: &str) -> BraceScan {
    let mut start = None;
    let mut depth = 0usize;

    for (i, ch) in text.char_indices() {
        match ch {
            '{' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' => {
                if depth == 0 {
                    return BraceScan::StrayClose { at: i };
                }
                depth -= 1;
                if depth == 0 {
                    if let Some(start) = start {
                        return BraceScan::Balanced(start..i + 1);
                    }
                }
            }
            _ => {}
        }
    }

    match start {
        Some(start) => BraceScan::Unterminated { start },
        None => BraceScan::NoObject,
    }
}

/// Return the first balanced `{...}` substring, or `None`.
pub fn extract_balanced_object(text: &str) -> Option<&str> {
    match scan_braces(text) {
        BraceScan::Balanced(range) => Some(&text[range]),
        _ => None,
    }
}

/// Byte index of the first `{`, shared by extraction and prefix derivation.
pub fn first_brace(text: &str) -> Option<usize> {
    text.find('{')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_inside_prose() {
        assert_eq!(
            extract_balanced_object("Here you go: {'a': 1} thanks"),
            Some("{'a': 1}")
        );
    }

    #[test]
    fn test_nested_object_is_kept_whole() {
        assert_eq!(
            extract_balanced_object("x {a: {b: {c: 1}}, d: 2} y"),
            Some("{a: {b: {c: 1}}, d: 2}")
        );
    }

    #[test]
    fn test_only_first_object_is_returned() {
        assert_eq!(extract_balanced_object("{a: 1} and {b: 2}"), Some("{a: 1}"));
    }

    #[test]
    fn test_unterminated_object() {
        assert_eq!(extract_balanced_object("result: {a: 1, b: 2"), None);
        assert_eq!(
            scan_braces("result: {a: 1, b: 2"),
            BraceScan::Unterminated { start: 8 }
        );
    }

    #[test]
    fn test_no_brace_at_all() {
        assert_eq!(scan_braces("no object here"), BraceScan::NoObject);
        assert_eq!(first_brace("no object here"), None);
    }

    #[test]
    fn test_stray_close_fails_the_whole_input() {
        assert_eq!(scan_braces("oops } then {a: 1}"), BraceScan::StrayClose { at: 5 });
        assert_eq!(extract_balanced_object("}{{}"), None);
    }

    #[test]
    fn test_braces_inside_strings_are_counted() {
        // The quoted `}` closes the object early.
        assert_eq!(extract_balanced_object("{'a': '}'}"), Some("{'a': '}"));
    }

    #[test]
    fn test_multibyte_text_before_object() {
        let text = "Voilà — {'ok': True}";
        assert_eq!(extract_balanced_object(text), Some("{'ok': True}"));
        assert_eq!(first_brace(text), text.find("{'ok'"));
    }
}
