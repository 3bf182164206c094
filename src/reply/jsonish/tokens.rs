//! Token definitions for the lenient object grammar
//!
//! The grammar is JSON with the conveniences assistants tend to emit when they
//! print a Python dict or a JavaScript literal: single-quoted strings, bare
//! identifier keys, trailing commas, `//` comments, hex integers and loose
//! decimal points. Tokens are produced by the logos derive macro.
use logos::Logos;
use std::fmt;

/// All possible tokens in the lenient grammar
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    // Structure
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,

    // Literal keywords
    #[token("null")]
    Null,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // Numbers keep their source text; conversion happens in the parser so that
    // integers stay integers and overflowing literals can be rejected there.
    #[regex(
        r"[+-]?(0[xX][0-9a-fA-F]+|[0-9]+\.?[0-9]*([eE][+-]?[0-9]+)?|\.[0-9]+([eE][+-]?[0-9]+)?)",
        |lex| lex.slice().to_string()
    )]
    Number(String),

    // Strings carry their unescaped contents
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, unescape)]
    #[regex(r"'([^'\\\n]|\\[^\n])*'", unescape)]
    Str(String),

    // Bare identifiers, only meaningful as object keys
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*", |lex| lex.slice().to_string())]
    Ident(String),
}

impl Token {
    /// Text usable as an object key, if this token can name one
    pub fn key_text(&self) -> Option<String> {
        match self {
            Token::Str(s) | Token::Ident(s) => Some(s.clone()),
            Token::Null => Some("null".to_string()),
            Token::True => Some("true".to_string()),
            Token::False => Some("false".to_string()),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Colon => write!(f, ":"),
            Token::Comma => write!(f, ","),
            Token::Null => write!(f, "null"),
            Token::True => write!(f, "true"),
            Token::False => write!(f, "false"),
            Token::Number(n) => write!(f, "{}", n),
            Token::Str(s) => write!(f, "{:?}", s),
            Token::Ident(s) => write!(f, "{}", s),
        }
    }
}

/// Strip the surrounding quotes from a string literal and resolve its escapes.
///
/// Any escaped character without a special meaning stands for itself, so `\'`
/// inside a double-quoted string and `\"` inside a single-quoted one both work.
fn unescape(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            'x' => {
                let code = hex_digits(&mut chars, 2)?;
                out.push(char::from_u32(code)?);
            }
            'u' => {
                let code = hex_digits(&mut chars, 4)?;
                if (0xD800..0xDC00).contains(&code) {
                    // High surrogate: a `\uDC00`-`\uDFFF` escape must follow
                    if chars.next()? != '\\' || chars.next()? != 'u' {
                        return None;
                    }
                    let low = hex_digits(&mut chars, 4)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return None;
                    }
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    out.push(char::from_u32(combined)?);
                } else {
                    out.push(char::from_u32(code)?);
                }
            }
            other => out.push(other),
        }
    }

    Some(out)
}

fn hex_digits(chars: &mut std::str::Chars<'_>, count: usize) -> Option<u32> {
    let mut code = 0;
    for _ in 0..count {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        Token::lexer(source).map(|t| t.expect("token")).collect()
    }

    #[test]
    fn test_structure_tokens() {
        assert_eq!(
            lex_all("{ } [ ] : ,"),
            vec![
                Token::LBrace,
                Token::RBrace,
                Token::LBracket,
                Token::RBracket,
                Token::Colon,
                Token::Comma,
            ]
        );
    }

    #[test]
    fn test_keywords_beat_identifiers() {
        assert_eq!(
            lex_all("null nullable true trueish false"),
            vec![
                Token::Null,
                Token::Ident("nullable".to_string()),
                Token::True,
                Token::Ident("trueish".to_string()),
                Token::False,
            ]
        );
    }

    #[test]
    fn test_numbers_keep_source_text() {
        assert_eq!(
            lex_all("5 -1.5 +3 .5 2. 1e3 0x1F"),
            vec![
                Token::Number("5".to_string()),
                Token::Number("-1.5".to_string()),
                Token::Number("+3".to_string()),
                Token::Number(".5".to_string()),
                Token::Number("2.".to_string()),
                Token::Number("1e3".to_string()),
                Token::Number("0x1F".to_string()),
            ]
        );
    }

    #[test]
    fn test_single_and_double_quoted_strings() {
        assert_eq!(
            lex_all(r#"'it\'s' "say \"hi\"" 'a"b'"#),
            vec![
                Token::Str("it's".to_string()),
                Token::Str("say \"hi\"".to_string()),
                Token::Str("a\"b".to_string()),
            ]
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            lex_all(r#""tab\there é \x41 😀""#),
            vec![Token::Str("tab\there é A 😀".to_string())]
        );
    }

    #[test]
    fn test_lone_high_surrogate_is_an_error() {
        let mut lexer = Token::lexer(r#""\ud83d""#);
        assert!(matches!(lexer.next(), Some(Err(_))));
    }

    #[test]
    fn test_line_comments_are_skipped() {
        assert_eq!(
            lex_all("{ // leave balance\n 'days': 5 }"),
            vec![
                Token::LBrace,
                Token::Str("days".to_string()),
                Token::Colon,
                Token::Number("5".to_string()),
                Token::RBrace,
            ]
        );
    }

    #[test]
    fn test_key_text() {
        assert_eq!(Token::Ident("name".into()).key_text(), Some("name".into()));
        assert_eq!(Token::Null.key_text(), Some("null".into()));
        assert_eq!(Token::Comma.key_text(), None);
    }
}
