use super::{lambda::lambda, parser::Parser};
use crate::{
    ast::{Call, Expression},
    error::{ParseError, TranspileError},
    string_to_tokens::TokenKind,
};
use tracing::instrument;

/// expr := atom { trailer }*
///
/// A trailer is either a parenthesized argument list or a trailing lambda.
#[instrument(level = "trace")]
pub fn expression(parser: Parser) -> Result<(Parser, Expression), TranspileError> {
    let parser = parser.descend()?;

    let (mut parser, mut result) = atom(parser)?;
    loop {
        if let Some((new_parser, _)) = parser.consume(TokenKind::OpeningParenthesis) {
            let (new_parser, arguments) = arguments(new_parser)?;
            parser = new_parser;
            result = Call {
                receiver: Box::new(result),
                arguments,
            }
            .into();
            continue;
        }
        if parser.next_is(TokenKind::OpeningCurlyBrace) {
            let (new_parser, new_result) = trailing_lambda(parser, result)?;
            parser = new_parser;
            result = new_result;
            continue;
        }
        break;
    }
    Ok((parser.ascend(), result))
}

/// atom := IDENT | INT | lambda | '(' expr ')' | '(' ')'
#[instrument(level = "trace")]
fn atom(parser: Parser) -> Result<(Parser, Expression), TranspileError> {
    if let Some((parser, token)) = parser.consume(TokenKind::Identifier) {
        return Ok((parser, Expression::Identifier(token.text.into())));
    }
    if let Some((parser, token)) = parser.consume(TokenKind::Int) {
        return Ok((parser, Expression::Int(token.text.into())));
    }
    if parser.next_is(TokenKind::OpeningCurlyBrace) {
        let (parser, lambda) = lambda(parser)?;
        return Ok((parser, lambda.into()));
    }
    if let Some((parser, _)) = parser.consume(TokenKind::OpeningParenthesis) {
        if let Some((parser, _)) = parser.consume(TokenKind::ClosingParenthesis) {
            return Ok((parser, Expression::EmptyParentheses));
        }
        // The parentheses contribute no node of their own: `(expr)` yields
        // the inner expression directly.
        let (parser, inner) = expression(parser)?;
        let Some((parser, _)) = parser.consume(TokenKind::ClosingParenthesis) else {
            return Err(parser.error(ParseError::ParenthesisNotClosed));
        };
        return Ok((parser, inner));
    }
    Err(parser.error(ParseError::ExpectedExpression))
}

/// The argument list of a call, after the opening parenthesis has already
/// been consumed. Comma-separated, non-trailing.
#[instrument(level = "trace")]
fn arguments(parser: Parser) -> Result<(Parser, Vec<Expression>), TranspileError> {
    if let Some((parser, _)) = parser.consume(TokenKind::ClosingParenthesis) {
        return Ok((parser, vec![]));
    }

    let (mut parser, first) = expression(parser)?;
    let mut arguments = vec![first];
    while let Some((new_parser, _)) = parser.consume(TokenKind::Comma) {
        let (new_parser, argument) = expression(new_parser)?;
        parser = new_parser;
        arguments.push(argument);
    }

    let Some((parser, _)) = parser.consume(TokenKind::ClosingParenthesis) else {
        return Err(parser.error(ParseError::ExpectedCommaOrClosingParenthesis));
    };
    Ok((parser, arguments))
}

/// A `{` directly after an expression attaches a lambda as an extra call
/// argument, but only after a `Call`, `Identifier`, `Int`, or
/// `EmptyParentheses`. After a bare `Lambda` it is an error; chains like
/// `{}{}` stay unambiguous that way.
#[instrument(level = "trace")]
fn trailing_lambda(
    parser: Parser,
    current: Expression,
) -> Result<(Parser, Expression), TranspileError> {
    if matches!(current, Expression::Lambda(_)) {
        return Err(parser.error(ParseError::LambdaAfterLambda));
    }

    let (parser, lambda) = lambda(parser)?;
    let result = match current {
        Expression::Call(mut call) => {
            call.arguments.push(lambda.into());
            call.into()
        }
        current => Call {
            receiver: Box::new(current),
            arguments: vec![lambda.into()],
        }
        .into(),
    };
    Ok((parser, result))
}
