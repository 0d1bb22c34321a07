use super::{expression::expression, parser::Parser};
use crate::{
    ast::{Expression, Lambda},
    error::{ParseError, TranspileError},
    string_to_tokens::TokenKind,
};
use tracing::instrument;

/// lambda := '{' [ params '->' ] body '}'
///
/// Whether the leading identifiers/ints form a parameter list is only known
/// once an arrow is (not) found behind them: `{x->x}` has a parameter,
/// `{x}` is a body. The run is read speculatively; without an arrow the
/// saved cursor is restored and the content is parsed as body expressions.
#[instrument(level = "trace")]
pub fn lambda(parser: Parser) -> Result<(Parser, Lambda), TranspileError> {
    let Some((parser, _)) = parser.consume(TokenKind::OpeningCurlyBrace) else {
        return Err(parser.error(ParseError::ExpectedExpression));
    };

    if let Some((parser, _)) = parser.consume(TokenKind::ClosingCurlyBrace) {
        return Ok((
            parser,
            Lambda {
                parameters: vec![],
                body: vec![],
            },
        ));
    }

    let parser_without_parameters = parser;
    let (parser, parameters) = match parameters(parser)? {
        Some((parser_with_parameters, parameters)) => {
            match parser_with_parameters.consume(TokenKind::Arrow) {
                Some((parser, _)) => (parser, parameters),
                None => (parser_without_parameters, vec![]),
            }
        }
        None => {
            if parser.next_is(TokenKind::Arrow) {
                return Err(parser.error(ParseError::ArrowWithoutParameters));
            }
            (parser, vec![])
        }
    };

    let (parser, body) = body(parser)?;
    let Some((parser, _)) = parser.consume(TokenKind::ClosingCurlyBrace) else {
        return Err(parser.error(ParseError::CurlyBraceNotClosed));
    };
    Ok((parser, Lambda { parameters, body }))
}

/// The speculative comma-separated run of parameter candidates. Returns
/// `None` when the content doesn't start with one. A non-candidate after a
/// comma inside the run is a hard error, not a rollback: the rollback only
/// happens when the completed run isn't followed by an arrow.
#[instrument(level = "trace")]
fn parameters(parser: Parser) -> Result<Option<(Parser, Vec<Box<str>>)>, TranspileError> {
    let Some((mut parser, first)) = parameter(parser) else {
        return Ok(None);
    };

    let mut parameters = vec![first];
    while let Some((new_parser, _)) = parser.consume(TokenKind::Comma) {
        let Some((new_parser, parameter)) = parameter(new_parser) else {
            return Err(new_parser.error(ParseError::ExpectedParameter));
        };
        parser = new_parser;
        parameters.push(parameter);
    }
    Ok(Some((parser, parameters)))
}
fn parameter(parser: Parser) -> Option<(Parser, Box<str>)> {
    parser
        .consume(TokenKind::Identifier)
        .or_else(|| parser.consume(TokenKind::Int))
        .map(|(parser, token)| (parser, token.text.into()))
}

#[instrument(level = "trace")]
fn body(mut parser: Parser) -> Result<(Parser, Vec<Expression>), TranspileError> {
    let mut body = vec![];
    while !parser.is_at_end() && !parser.next_is(TokenKind::ClosingCurlyBrace) {
        let (new_parser, expression) = expression(parser)?;
        parser = new_parser;
        body.push(expression);
    }
    Ok((parser, body))
}
