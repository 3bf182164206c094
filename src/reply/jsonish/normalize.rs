//! Foreign literal normalization
//!
//! Assistants often print Python dicts. Before the lenient grammar sees a
//! candidate, the three Python literal keywords are rewritten to their JSON
//! spellings. Only whole words are touched, so `Nonesuch` or `is_True` survive.
//! The rewrite does not know about quotes: `'None of them'` becomes
//! `'null of them'`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static FOREIGN_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(None|True|False)\b").expect("foreign literal pattern is valid")
});

/// Rewrite `None`, `True` and `False` to `null`, `true` and `false`.
///
/// Borrows the input when there is nothing to rewrite.
pub fn normalize_foreign_literals(candidate: &str) -> Cow<'_, str> {
    FOREIGN_LITERAL.replace_all(candidate, |caps: &Captures| match &caps[1] {
        "None" => "null",
        "True" => "true",
        _ => "false",
    })
}
