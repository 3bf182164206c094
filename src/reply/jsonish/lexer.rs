//! Tokenization for the lenient object grammar
//!
//! Raw tokenization is handled entirely by logos. Unlike a best-effort lexer,
//! an unrecognized character fails the whole candidate: a half-tokenized object
//! would parse into something the assistant never wrote.

use super::error::JsonishError;
use super::tokens::Token;
use logos::Logos;
use std::ops::Range;

/// Type alias for token with location
pub type TokenLocation = (Token, Range<usize>);

/// Tokenize source with location information
///
/// Returns the tokens paired with their byte ranges, or the offset of the first
/// input logos could not match.
pub fn tokenize_with_locations(source: &str) -> Result<Vec<TokenLocation>, JsonishError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(JsonishError::Lex {
                    offset: lexer.span().start,
                })
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_with_locations() {
        let tokens = tokenize_with_locations("{'a': 1}").unwrap();
        assert_eq!(
            tokens,
            vec![
                (Token::LBrace, 0..1),
                (Token::Str("a".to_string()), 1..4),
                (Token::Colon, 4..5),
                (Token::Number("1".to_string()), 6..7),
                (Token::RBrace, 7..8),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize_with_locations("").unwrap(), vec![]);
    }

    #[test]
    fn test_unknown_character_reports_offset() {
        assert_eq!(
            tokenize_with_locations("{a: 1 # note}"),
            Err(JsonishError::Lex { offset: 6 })
        );
    }

    #[test]
    fn test_unterminated_string_is_an_error() {
        assert!(tokenize_with_locations("{'a: 1}").is_err());
    }
}
