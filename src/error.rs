use crate::position::{Offset, RangeOfOffset};
use std::ops::Range;
use thiserror::Error;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TranspileError {
    pub span: Range<Offset>,
    pub payload: TranspileErrorPayload,
}
impl TranspileError {
    #[must_use]
    pub fn new(span: Range<Offset>, payload: impl Into<TranspileErrorPayload>) -> Self {
        Self {
            span,
            payload: payload.into(),
        }
    }

    #[must_use]
    pub fn to_string_with_location(&self, source: &str) -> String {
        format!("{}: {}", self.span.format(source), self.payload)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
pub enum TranspileErrorPayload {
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
pub enum TokenError {
    #[error("This is an unexpected character.")]
    UnexpectedCharacters,
    #[error("This int runs into the following word.")]
    IntRunsIntoWord,
}

#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
pub enum ParseError {
    #[error("The input is empty.")]
    EmptyInput,
    #[error("An expression should come here.")]
    ExpectedExpression,
    #[error("The parser couldn't parse this rest.")]
    UnparsedRest,
    #[error("`()` can't be the whole program.")]
    EmptyParenthesesAsProgram,
    #[error("This parenthesis isn't closed.")]
    ParenthesisNotClosed,
    #[error("This argument should be followed by a comma or a closing parenthesis.")]
    ExpectedCommaOrClosingParenthesis,
    #[error("A parameter should come here.")]
    ExpectedParameter,
    #[error("This arrow has no parameters before it.")]
    ArrowWithoutParameters,
    #[error("A lambda can't directly follow another lambda.")]
    LambdaAfterLambda,
    #[error("This curly brace is not closed.")]
    CurlyBraceNotClosed,
    #[error("This expression is nested too deeply.")]
    TooMuchNesting,
}
