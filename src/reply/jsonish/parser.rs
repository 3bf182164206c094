//! Lenient object grammar using chumsky
//!
//! Builds `serde_json::Value`s from the token stream produced by the lexer.
//! On top of JSON the grammar accepts single-quoted strings, bare identifier
//! keys, keyword keys and a trailing comma before `}` or `]`.

use chumsky::error::Error as _;
use chumsky::prelude::*;
use chumsky::Stream;
use serde_json::{Number, Value};

use super::error::JsonishError;
use super::lexer::{tokenize_with_locations, TokenLocation};
use super::tokens::Token;

/// Type alias for parser error
type ParserError = Simple<Token>;

/// Deepest object/array nesting the grammar accepts, matching serde_json's
/// recursion limit for the strict path.
pub const MAX_DEPTH: usize = 128;

/// Build the value parser.
pub(crate) fn value_parser() -> impl Parser<Token, Value, Error = ParserError> + Clone {
    recursive(|value| {
        let scalar = filter_map(|span, token: Token| -> Result<Value, ParserError> {
            match token {
                Token::Null => Ok(Value::Null),
                Token::True => Ok(Value::Bool(true)),
                Token::False => Ok(Value::Bool(false)),
                Token::Str(s) => Ok(Value::String(s)),
                Token::Number(literal) => number_value(&literal).ok_or_else(|| {
                    Simple::custom(span, format!("number `{}` is out of range", literal))
                }),
                other => Err(Simple::expected_input_found(span, Vec::new(), Some(other))),
            }
        })
        .labelled("value");

        let key = filter_map(|span, token: Token| -> Result<String, ParserError> {
            match token.key_text() {
                Some(key) => Ok(key),
                None => Err(Simple::expected_input_found(span, Vec::new(), Some(token))),
            }
        })
        .labelled("key");

        let array = value
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LBracket), just(Token::RBracket))
            .map(Value::Array)
            .labelled("array");

        let member = key.then_ignore(just(Token::Colon)).then(value);

        let object = member
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LBrace), just(Token::RBrace))
            .map(|members: Vec<(String, Value)>| Value::Object(members.into_iter().collect()))
            .labelled("object");

        choice((object, array, scalar))
    })
}

/// Parse a complete candidate with the lenient grammar.
///
/// The whole source must form exactly one value.
pub fn parse_lenient(source: &str) -> Result<Value, JsonishError> {
    let tokens = tokenize_with_locations(source)?;
    // The grammar recurses once per level
    check_depth(&tokens)?;
    let eoi = source.len()..source.len();

    value_parser()
        .then_ignore(end())
        .parse(Stream::from_iter(eoi, tokens.into_iter()))
        .map_err(|errors| match errors.into_iter().next() {
            Some(error) => JsonishError::Syntax {
                offset: error.span().start,
                message: error.to_string(),
            },
            None => JsonishError::Syntax {
                offset: source.len(),
                message: "no value".to_string(),
            },
        })
}

/// Reject token streams that open more than [`MAX_DEPTH`] containers at once.
fn check_depth(tokens: &[TokenLocation]) -> Result<(), JsonishError> {
    let mut depth = 0usize;
    for (token, span) in tokens {
        match token {
            Token::LBrace | Token::LBracket => {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(JsonishError::TooDeep {
                        offset: span.start,
                        limit: MAX_DEPTH,
                    });
                }
            }
            Token::RBrace | Token::RBracket => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

/// Convert a number literal to a JSON number.
///
/// Integers that fit `i64`/`u64` stay integers; everything else goes through
/// `f64`. Literals that overflow to infinity have no JSON form.
fn number_value(literal: &str) -> Option<Value> {
    let (negative, magnitude) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };

    if let Some(hex) = magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
    {
        let n = i64::from_str_radix(hex, 16).ok()?;
        return Some(Value::from(if negative { -n } else { n }));
    }

    if !magnitude.contains(['.', 'e', 'E']) {
        let signed = if negative {
            format!("-{}", magnitude)
        } else {
            magnitude.to_string()
        };
        if let Ok(n) = signed.parse::<i64>() {
            return Some(Value::from(n));
        }
        if let Ok(n) = signed.parse::<u64>() {
            return Some(Value::from(n));
        }
    }

    let mut n: f64 = magnitude.parse().ok()?;
    if negative {
        n = -n;
    }
    Number::from_f64(n).map(Value::Number)
}
