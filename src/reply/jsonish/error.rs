//! Failure reasons for embedded object extraction

use thiserror::Error;

/// Why no object could be read from a reply.
///
/// [`parse_jsonish`](super::parse_jsonish) folds every variant into `None`;
/// [`parse_jsonish_detailed`](super::parse_jsonish_detailed) keeps them apart.
/// Offsets are byte offsets into the text that was passed in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonishError {
    /// The text is not strict JSON and contains no `{`
    #[error("no object found")]
    NotFound,
    /// A `{` was never closed, or a `}` appeared before any `{`
    #[error("unbalanced braces at byte {offset}")]
    Unbalanced { offset: usize },
    /// The candidate contains input the lenient grammar has no token for
    #[error("unrecognized input at byte {offset}")]
    Lex { offset: usize },
    /// The candidate nests objects or arrays deeper than the lenient grammar allows
    #[error("nesting deeper than {limit} levels at byte {offset}")]
    TooDeep { offset: usize, limit: usize },
    /// The candidate tokenized but does not form a value
    #[error("syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },
}

impl JsonishError {
    /// Shift any offset by `delta`, used when the error came from a slice
    pub(crate) fn offset_by(self, delta: usize) -> Self {
        match self {
            JsonishError::NotFound => JsonishError::NotFound,
            JsonishError::Unbalanced { offset } => JsonishError::Unbalanced {
                offset: offset + delta,
            },
            JsonishError::Lex { offset } => JsonishError::Lex {
                offset: offset + delta,
            },
            JsonishError::TooDeep { offset, limit } => JsonishError::TooDeep {
                offset: offset + delta,
                limit,
            },
            JsonishError::Syntax { offset, message } => JsonishError::Syntax {
                offset: offset + delta,
                message,
            },
        }
    }
}
