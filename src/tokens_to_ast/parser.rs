use crate::{
    error::{ParseError, TranspileError, TranspileErrorPayload},
    position::Offset,
    string_to_tokens::{Token, TokenKind},
};
use std::ops::Range;

/// How deeply expressions may nest. Parsing recurses through parentheses,
/// argument lists, and lambda bodies, so adversarially nested input must be
/// cut off before it exhausts the native stack.
pub const MAX_EXPRESSION_DEPTH: usize = 128;

/// A cursor over the token sequence. It is `Copy`: parse functions take it by
/// value and return the advanced cursor, so backtracking is simply keeping
/// the old value around.
#[derive(Clone, Copy, Debug)]
pub struct Parser<'t> {
    tokens: &'t [Token<'t>],
    index: usize,
    depth: usize,
}
impl<'t> Parser<'t> {
    #[must_use]
    pub const fn new(tokens: &'t [Token<'t>]) -> Self {
        Self {
            tokens,
            index: 0,
            depth: 0,
        }
    }

    #[must_use]
    pub fn peek(self) -> Option<&'t Token<'t>> {
        self.tokens.get(self.index)
    }
    #[must_use]
    pub fn next_is(self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind == kind)
    }
    #[must_use]
    pub fn is_at_end(self) -> bool {
        self.index == self.tokens.len()
    }

    #[must_use]
    pub fn consume(self, kind: TokenKind) -> Option<(Self, &'t Token<'t>)> {
        let token = self.peek().filter(|token| token.kind == kind)?;
        Some((
            Self {
                index: self.index + 1,
                ..self
            },
            token,
        ))
    }

    pub fn descend(self) -> Result<Self, TranspileError> {
        if self.depth == MAX_EXPRESSION_DEPTH {
            return Err(self.error(ParseError::TooMuchNesting));
        }
        Ok(Self {
            depth: self.depth + 1,
            ..self
        })
    }
    #[must_use]
    pub fn ascend(self) -> Self {
        Self {
            depth: self.depth - 1,
            ..self
        }
    }

    /// The span of the next token, or the zero-width span at the end of the
    /// input.
    #[must_use]
    pub fn span(self) -> Range<Offset> {
        self.peek().map_or_else(
            || {
                let end = self
                    .tokens
                    .last()
                    .map_or(Offset(0), |token| token.span.end);
                end..end
            },
            |token| token.span.clone(),
        )
    }

    #[must_use]
    pub fn error(self, payload: impl Into<TranspileErrorPayload>) -> TranspileError {
        TranspileError::new(self.span(), payload)
    }
}
