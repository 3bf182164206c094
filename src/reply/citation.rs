//! Trailing citation annotations
//!
//! The agent appends `(source — location)` to answers grounded in a policy
//! document. This module splits that annotation off the answer body.
//!
//! Matching is anchored at the end of the answer and parentheses are not allowed
//! inside either field, so an earlier aside like `(see below)` never pulls the
//! match to the left. When several annotations trail the answer back to back,
//! the whole run is taken so that the remaining body never ends in one.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static TRAILING_CITATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\([^()]+ — [^()]+\))\s*$").expect("citation pattern is valid")
});

/// An answer split into its body and optional citation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitationSplit {
    pub text: String,
    pub citation: Option<String>,
}

/// Split a trailing `(A — B)` annotation off `answer`.
///
/// Without a match the answer comes back untouched, whitespace included.
pub fn extract_citation(answer: &str) -> CitationSplit {
    let Some(end) = trailing_citation(answer).map(|(_, end)| end) else {
        return CitationSplit {
            text: answer.to_string(),
            citation: None,
        };
    };

    let mut start = answer.len();
    let mut body = answer;
    while let Some((s, _)) = trailing_citation(body) {
        start = s;
        body = &answer[..s];
    }

    CitationSplit {
        text: answer[..start].trim().to_string(),
        citation: Some(answer[start..end].to_string()),
    }
}

/// Byte range of the annotation ending `text`, closing parenthesis included.
fn trailing_citation(text: &str) -> Option<(usize, usize)> {
    TRAILING_CITATION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| (m.start(), m.end()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_trailing_citation() {
        let split = extract_citation("Answer text (Policy Doc — Section 3)");
        assert_eq!(split.text, "Answer text");
        assert_eq!(split.citation.as_deref(), Some("(Policy Doc — Section 3)"));
    }

    #[test]
    fn test_trailing_whitespace_after_citation() {
        let split = extract_citation("You get 15 days. (PTO Policy — Accrual)  \n");
        assert_eq!(split.text, "You get 15 days.");
        assert_eq!(split.citation.as_deref(), Some("(PTO Policy — Accrual)"));
    }

    #[test]
    fn test_citation_is_copied_verbatim() {
        let split = extract_citation("x (Handbook  v2 — §4.1 Leave)");
        assert_eq!(split.citation.as_deref(), Some("(Handbook  v2 — §4.1 Leave)"));
    }

    #[test]
    fn test_no_citation_leaves_text_untouched() {
        let answer = "  Just an answer.  ";
        let split = extract_citation(answer);
        assert_eq!(split.text, answer);
        assert_eq!(split.citation, None);
    }

    #[test]
    fn test_sentinel_passes_through() {
        let split = extract_citation("(no answer)");
        assert_eq!(split.text, "(no answer)");
        assert_eq!(split.citation, None);
    }

    #[test]
    fn test_empty_answer() {
        assert_eq!(
            extract_citation(""),
            CitationSplit {
                text: String::new(),
                citation: None
            }
        );
    }

    #[test]
    fn test_requires_single_spaces_around_dash() {
        assert_eq!(extract_citation("x (Doc—Section)").citation, None);
        assert_eq!(extract_citation("x (Doc - Section)").citation, None);
    }

    #[test]
    fn test_text_after_citation_prevents_match() {
        assert_eq!(extract_citation("(Doc — Section) and more").citation, None);
    }

    #[test]
    fn test_nested_parentheses_take_innermost_group() {
        let split = extract_citation("See (the (Guide — Part 2)");
        assert_eq!(split.citation.as_deref(), Some("(Guide — Part 2)"));
        assert_eq!(split.text, "See (the");
    }

    #[test]
    fn test_earlier_aside_is_not_captured() {
        let split = extract_citation("Carryover (up to 5 days) is allowed. (PTO — Carryover)");
        assert_eq!(split.text, "Carryover (up to 5 days) is allowed.");
        assert_eq!(split.citation.as_deref(), Some("(PTO — Carryover)"));
    }

    #[test]
    fn test_run_of_citations_is_taken_whole() {
        let split = extract_citation("Yes. (PTO — Accrual) (Leave — Requests)");
        assert_eq!(split.text, "Yes.");
        assert_eq!(
            split.citation.as_deref(),
            Some("(PTO — Accrual) (Leave — Requests)")
        );
        assert_eq!(extract_citation(&split.text).citation, None);
    }
}
