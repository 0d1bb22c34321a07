use crate::{
    error::{TokenError, TranspileError},
    position::Offset,
};
use itertools::Itertools;
use logos::Logos;
use std::ops::Range;
use strum::IntoStaticStr;
use tracing::instrument;

#[derive(Clone, Copy, Debug, Eq, Hash, IntoStaticStr, Logos, PartialEq)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    // A lone `-` is not a token of the language; only the full arrow matches.
    #[token("->")]
    Arrow,
    #[regex("[0-9]+")]
    Int,
    #[regex("[A-Za-z_][A-Za-z_0-9]*")]
    Identifier,
    #[token("{")]
    OpeningCurlyBrace,
    #[token("}")]
    ClosingCurlyBrace,
    #[token("(")]
    OpeningParenthesis,
    #[token(")")]
    ClosingParenthesis,
    #[token(",")]
    Comma,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub text: &'s str,
    pub span: Range<Offset>,
}

/// Turns the source into its complete token sequence, or fails for the whole
/// input. There is no partial-recovery mode: one stray character rejects
/// everything.
#[instrument(level = "trace")]
pub fn string_to_tokens(source: &str) -> Result<Vec<Token>, TranspileError> {
    let mut tokens = vec![];
    let mut lexer = TokenKind::lexer(source);
    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Offset(range.start)..Offset(range.end);
        let Ok(kind) = result else {
            return Err(TranspileError::new(span, TokenError::UnexpectedCharacters));
        };
        tokens.push(Token {
            kind,
            text: lexer.slice(),
            span,
        });
    }

    // An int directly glued to a word (`1a`) is one malformed unit, not two
    // valid tokens.
    if let Some((int, word)) = tokens.iter().tuple_windows().find(|(int, word)| {
        int.kind == TokenKind::Int
            && word.kind == TokenKind::Identifier
            && int.span.end == word.span.start
    }) {
        return Err(TranspileError::new(
            int.span.start..word.span.end,
            TokenError::IntRunsIntoWord,
        ));
    }

    Ok(tokens)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::TranspileErrorPayload;

    fn format_tokens(source: &str) -> String {
        string_to_tokens(source)
            .unwrap()
            .iter()
            .map(|token| format!("{}:{}", <&'static str>::from(token.kind), token.text))
            .join("\n")
    }

    #[test]
    fn test_tokenize_call_with_trailing_lambda() {
        assert_eq!(
            format_tokens("invoke  (   a ,\n  b ) { x -> 42 }"),
            "Identifier:invoke\n\
             OpeningParenthesis:(\n\
             Identifier:a\n\
             Comma:,\n\
             Identifier:b\n\
             ClosingParenthesis:)\n\
             OpeningCurlyBrace:{\n\
             Identifier:x\n\
             Arrow:->\n\
             Int:42\n\
             ClosingCurlyBrace:}",
        );
    }

    #[test]
    fn test_tokenize_words() {
        assert_eq!(format_tokens("_foo1 bar_2"), "Identifier:_foo1\nIdentifier:bar_2");
        assert_eq!(format_tokens("1 a"), "Int:1\nIdentifier:a");
        assert_eq!(format_tokens("1->"), "Int:1\nArrow:->");
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert_eq!(string_to_tokens(""), Ok(vec![]));
        assert_eq!(string_to_tokens(" \t\n "), Ok(vec![]));
    }

    #[test]
    fn test_tokenize_rejects_unexpected_characters() {
        for source in ["a + b", "f(x);", "a.b", "-", "f(\"text\")", "λ"] {
            let error = string_to_tokens(source).unwrap_err();
            assert_eq!(
                error.payload,
                TranspileErrorPayload::Token(TokenError::UnexpectedCharacters),
                "for source {source:?}",
            );
        }
    }

    #[test]
    fn test_tokenize_rejects_int_glued_to_word() {
        let error = string_to_tokens("1a").unwrap_err();
        assert_eq!(
            error.payload,
            TranspileErrorPayload::Token(TokenError::IntRunsIntoWord),
        );
        assert_eq!(error.span, Offset(0)..Offset(2));

        assert!(string_to_tokens("f(12_)").is_err());
        assert!(string_to_tokens("42x").is_err());
    }
}
